// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP(S).
//
// Key functionality:
// - Makes HTTP GET requests and returns the body as text on 200 OK
// - Follows redirects by hand (3xx + Location header), up to a fixed limit
// - Classifies failures: network errors, bad status codes, redirect loops
//
// Why follow redirects ourselves?
// - reqwest can do it, but then a redirect loop and a plain error look alike
// - Doing it by hand lets us report "too many redirects" as its own error
//   and log every hop
//
// Rust concepts:
// - async/await: For network I/O
// - thiserror: Derives std::error::Error for our error enum
// - Loops with early return instead of recursion (no stack growth)
// =============================================================================

use reqwest::header::LOCATION;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Maximum number of redirect hops followed for a single fetch.
pub const MAX_REDIRECTS: usize = 5;

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything that can go wrong while fetching one page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS failure, refused connection, timeout, broken body stream...
    #[error("network error while fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200 or a usable redirect
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Redirect chain longer than the limit (usually a loop)
    #[error("too many redirects (more than {limit}) starting from {url}")]
    TooManyRedirects { url: String, limit: usize },

    /// Location header that isn't text or can't be resolved to a URL
    #[error("invalid redirect from {url} to '{location}'")]
    InvalidRedirect { url: String, location: String },

    /// Only http and https can be fetched
    #[error("unsupported URL scheme '{scheme}' in {url}")]
    UnsupportedScheme { url: String, scheme: String },
}

/// A small HTTP GET client that returns page bodies as text.
///
/// Cheap to clone: the underlying reqwest client is reference counted.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_redirects: usize,
}

impl Fetcher {
    /// Builds a fetcher with the default timeout and redirect limit.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("sitecrawl/", env!("CARGO_PKG_VERSION")))
            // We follow redirects ourselves, see fetch()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            max_redirects: MAX_REDIRECTS,
        })
    }

    /// Fetches `url` and returns the response body.
    ///
    /// Succeeds only on an eventual `200 OK`. A 3xx response with a
    /// `Location` header is resolved against the URL that produced it and
    /// fetched in its place, at most `MAX_REDIRECTS` times.
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let mut current = url.clone();

        // One initial request plus up to max_redirects follow-ups
        for _ in 0..=self.max_redirects {
            ensure_http(&current)?;

            let response = self
                .client
                .get(current.clone())
                .send()
                .await
                .map_err(|source| FetchError::Network {
                    url: current.to_string(),
                    source,
                })?;

            let status = response.status();

            if status == StatusCode::OK {
                return response.text().await.map_err(|source| FetchError::Network {
                    url: current.to_string(),
                    source,
                });
            }

            if status.is_redirection() {
                if let Some(location) = response.headers().get(LOCATION) {
                    let next = resolve_location(&current, location.as_bytes())?;
                    debug!("{} redirected ({}) to {}", current, status.as_u16(), next);
                    current = next;
                    continue;
                }
            }

            return Err(FetchError::Status {
                url: current.to_string(),
                status: status.as_u16(),
            });
        }

        Err(FetchError::TooManyRedirects {
            url: url.to_string(),
            limit: self.max_redirects,
        })
    }
}

// Rejects anything that isn't http:// or https://
fn ensure_http(url: &Url) -> Result<(), FetchError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::UnsupportedScheme {
            url: url.to_string(),
            scheme: other.to_string(),
        }),
    }
}

// Resolves a Location header value against the URL that returned it
//
// Location may be absolute ("https://example.com/new") or relative
// ("/new-path", "../other"); Url::join handles both.
fn resolve_location(from: &Url, raw: &[u8]) -> Result<Url, FetchError> {
    let location = String::from_utf8_lossy(raw);

    from.join(location.trim())
        .map_err(|_| FetchError::InvalidRedirect {
            url: from.to_string(),
            location: location.into_owned(),
        })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a for loop instead of calling fetch() again on redirect?
//    - An async fn can't call itself directly without boxing the future
//    - A loop with a counter also gives us the redirect limit for free
//
// 2. What does #[source] do in the error enum?
//    - It tells thiserror which field is the underlying cause
//    - Tools like anyhow print the whole chain: "network error ...: dns error"
//
// 3. Why Policy::none()?
//    - By default reqwest follows up to 10 redirects silently
//    - We want to see each 3xx response ourselves
// -----------------------------------------------------------------------------
