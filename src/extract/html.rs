// src/extract/html.rs
// =============================================================================
// This module pulls same-domain links out of an HTML page.
//
// For every <a href="..."> in document order:
// 1. Resolve the href against the page URL (relative -> absolute)
// 2. Drop it if the hostname differs from the seed's hostname
// 3. Drop it if root-only filtering is on and the path isn't rooted at "/"
// 4. Strip the #fragment
// 5. Keep it only if the crawl's ledger hasn't seen it before
//
// We use the `scraper` crate (html5ever under the hood) for parsing and
// CSS selection, and the `url` crate for resolution.
//
// Rust concepts:
// - &mut borrowing: extraction updates the caller's ledger in place
// - Result<T, E>: normalization can fail on malformed hrefs
// =============================================================================

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use super::LinkLedger;

/// Extracts the links on this page that the crawl hasn't seen yet.
///
/// Parameters:
///   html: the page source
///   base: the URL the page was requested from (for relative hrefs)
///   seed_host: hostname every kept link must share
///   root_only: keep only links whose path starts with "/"
///   ledger: links already discovered in this crawl; new links get added
///
/// Returns the newly discovered links in document order. An href that
/// appears twice on the page (or `/a` and `/a#top`) is reported once.
pub fn extract_links(
    html: &str,
    base: &Url,
    seed_host: &str,
    root_only: bool,
    ledger: &mut LinkLedger,
) -> Vec<String> {
    let mut links = Vec::new();

    let document = Html::parse_document(html);

    // "a[href]" is a constant, known-valid selector
    let selector = Selector::parse("a[href]").expect("static selector is valid");

    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };

        let url = match normalize(base, href) {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping invalid URL '{}' on {}: {}", href, base, e);
                continue;
            }
        };

        if url.host_str() != Some(seed_host) {
            continue;
        }

        // Any URL that passed the host check has a rooted path, so this
        // filter never rejects anything in practice
        if root_only && !url.path().starts_with('/') {
            continue;
        }

        if ledger.insert(url.as_str()) {
            links.push(url.into());
        }
    }

    links
}

/// Resolves `href` against `base` and drops the fragment.
///
/// Examples with base "https://example.com/docs/":
///   "intro#setup"          -> "https://example.com/docs/intro"
///   "/about"               -> "https://example.com/about"
///   "https://other.org/x#" -> "https://other.org/x"
fn normalize(base: &Url, href: &str) -> Result<Url, url::ParseError> {
    let mut url = base.join(href)?;
    url.set_fragment(None);
    Ok(url)
}
