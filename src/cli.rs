// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   crawl <url> [--first-level-only]
//
// We use the "derive" API which lets us define the CLI structure using
// a plain Rust struct and attributes (the #[...] things).
// =============================================================================

use clap::Parser;

use crate::crawl::CrawlMode;

// This struct represents the whole command line
//
// #[derive(Parser)] tells clap to generate the parsing code
#[derive(Parser, Debug)]
#[command(
    name = "crawl",
    version,
    about = "List every same-domain link on a page, and on the pages it links to",
    long_about = "crawl fetches a page, collects every link that stays on the same host, \
                  then fetches each of those links and collects their links too. \
                  URLs are printed one per line on stdout; progress goes to stderr, \
                  so the output can be piped straight into other tools."
)]
pub struct Cli {
    /// Seed URL to start from (e.g., https://example.com/docs/)
    ///
    /// This is a positional argument (required)
    pub url: String,

    /// Only list links found on the seed page itself
    ///
    /// Without this flag every first-level link is fetched as well,
    /// one per second, and its links are added to the output.
    #[arg(long)]
    pub first_level_only: bool,
}

impl Cli {
    pub fn mode(&self) -> CrawlMode {
        if self.first_level_only {
            CrawlMode::FirstLevelOnly
        } else {
            CrawlMode::TwoLevel
        }
    }
}
