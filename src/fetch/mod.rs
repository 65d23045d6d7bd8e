// src/fetch/mod.rs
// =============================================================================
// This module retrieves pages from the web.
//
// Submodules:
// - http: GET requests, manual redirect following, typed fetch errors
//
// The crawler only ever needs "give me the HTML at this URL", so that is
// the whole public API.
// =============================================================================

mod http;

pub use http::Fetcher;
