// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (always to stderr)
// 3. Run the crawl
// 4. Print one URL per line to stdout
// 5. Exit with proper code (0 = success, 1 = usage or crawl error)
//
// stdout carries nothing but URLs, so `crawl https://example.com | sort`
// and friends work without filtering.
// =============================================================================

mod cli;
mod crawl;
mod extract;
mod fetch;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use crawl::{CrawlConfig, Crawler};

use anyhow::Result;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not errors
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors go to stderr, exit code 1 (clap's own is 2)
            eprint!("{}", e);
            std::process::exit(1);
        }
    };

    init_tracing();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG overrides the default filter, e.g. RUST_LOG=crawl=debug
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crawl=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = CrawlConfig::new(&cli.url, cli.mode())?;
    let crawler = Crawler::new(config)?;

    let links = crawler.run().await?;

    write_links(io::stdout().lock(), &links)?;

    eprintln!("\nTotal: {} URL(s) found", links.len());

    Ok(())
}

// Writes one URL per line
//
// A reader that goes away early (`crawl ... | head -1`) is not an error:
// we just stop writing.
fn write_links<W: Write>(mut out: W, links: &[String]) -> io::Result<()> {
    let result = links
        .iter()
        .try_for_each(|link| writeln!(out, "{}", link))
        .and_then(|()| out.flush());

    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Accepts `capacity` writes, then fails every call with `kind`
    struct ClosingWriter {
        written: Vec<u8>,
        capacity: usize,
        kind: io::ErrorKind,
    }

    impl Write for ClosingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.capacity == 0 {
                return Err(io::Error::from(self.kind));
            }
            self.capacity -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn links() -> Vec<String> {
        vec![
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string(),
        ]
    }

    #[test]
    fn test_write_links_one_per_line() {
        let mut out = Vec::new();
        write_links(&mut out, &links()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "https://example.com/a\nhttps://example.com/b\n"
        );
    }

    #[test]
    fn test_closed_pipe_stops_quietly() {
        let mut out = ClosingWriter {
            written: Vec::new(),
            capacity: 0,
            kind: io::ErrorKind::BrokenPipe,
        };
        assert!(write_links(&mut out, &links()).is_ok());
        assert!(out.written.is_empty());
    }

    #[test]
    fn test_other_write_errors_propagate() {
        let mut out = ClosingWriter {
            written: Vec::new(),
            capacity: 0,
            kind: io::ErrorKind::PermissionDenied,
        };
        let err = write_links(&mut out, &links()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
