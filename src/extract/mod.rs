// src/extract/mod.rs
// =============================================================================
// This module turns fetched HTML into crawl links.
//
// Submodules:
// - html: anchor selection, normalization, same-domain filtering
// - ledger: the per-crawl set of links already discovered
//
// Extraction is stateful on purpose: every call is handed the same ledger,
// so a link found on two pages is only ever reported for the first one.
// =============================================================================

mod html;
mod ledger;

pub use html::extract_links;
pub use ledger::LinkLedger;
