// src/crawl/mod.rs
// =============================================================================
// This module orchestrates a crawl.
//
// Features:
// - Fetches the seed page and lists its same-domain links
// - Optionally follows each of those links one level deeper
// - Polite crawling: one request at a time, with a pause between pages
// - A failing first-level page is skipped, not fatal
//
// Submodules:
// - config: validated seed URL, crawl mode, delay policy
// - traverse: the two-phase traversal itself
// =============================================================================

mod config;
mod traverse;

pub use config::{CrawlConfig, CrawlMode};
pub use traverse::Crawler;
