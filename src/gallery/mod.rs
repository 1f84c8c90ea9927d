//! Third-party photo sources for portfolio galleries.
//!
//! DESIGN
//! ======
//! Everything here is best-effort. Pinterest and Pixieset are scraped from
//! public HTML with regexes; Dropbox and Google Drive are listed through
//! their HTTP APIs. A failed fetch is logged and yields an empty list so a
//! gallery page degrades to "no photos" instead of an error. Only bad
//! caller input (an unsupported host, a malformed folder id) is reported.
//!
//! Extraction and response parsing are pure functions so they can be
//! tested against captured fixtures.

pub mod dropbox;
pub mod drive;
pub mod pinterest;
pub mod pixieset;

use std::time::Duration;

use reqwest::Url;

use crate::config::OutboundTimeouts;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; merchsite-gallery/0.1)";
const MAX_REDIRECTS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("unsupported gallery source: {0}")]
    UnsupportedSource(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// Shared HTTP client plus the optional API credentials.
pub struct GalleryClient {
    http: reqwest::Client,
    dropbox_token: Option<String>,
    drive_api_key: Option<String>,
}

impl GalleryClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(
        timeouts: OutboundTimeouts,
        dropbox_token: Option<String>,
        drive_api_key: Option<String>,
    ) -> Result<Self, GalleryError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .redirect(redirect_policy())
            .build()
            .map_err(|e| GalleryError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, dropbox_token, drive_api_key })
    }

    async fn fetch_html(&self, url: &Url) -> Result<String, GalleryError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| GalleryError::Request(e.to_string()))?;
        read_body(response).await
    }
}

async fn read_body(response: reqwest::Response) -> Result<String, GalleryError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| GalleryError::Request(e.to_string()))?;
    if !(200..300).contains(&status) {
        return Err(GalleryError::Status { status, body: text });
    }
    Ok(text)
}

/// Parse `raw` and require an `http(s)` URL whose host is accepted by `host_ok`.
pub(crate) fn parse_source_url(raw: &str, host_ok: impl Fn(&str) -> bool) -> Result<Url, GalleryError> {
    let url = Url::parse(raw.trim()).map_err(|_| GalleryError::UnsupportedSource(raw.to_owned()))?;
    let scheme_ok = matches!(url.scheme(), "http" | "https");
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    if !scheme_ok || !host_ok(&host) {
        return Err(GalleryError::UnsupportedSource(raw.to_owned()));
    }
    Ok(url)
}

/// Every redirect hop must land on a scrapeable gallery host, otherwise an
/// open redirect would carry the fetch off the allow-list. A blocked hop
/// hands back the 3xx response, which surfaces as a `Status` error.
fn redirect_policy() -> reqwest::redirect::Policy {
    reqwest::redirect::Policy::custom(|attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        if redirect_allowed(attempt.url()) {
            attempt.follow()
        } else {
            tracing::warn!(url = %attempt.url(), "gallery redirect blocked");
            attempt.stop()
        }
    })
}

pub(crate) fn redirect_allowed(next: &Url) -> bool {
    let host = next.host_str().unwrap_or_default().to_ascii_lowercase();
    matches!(next.scheme(), "http" | "https")
        && (pinterest::is_pinterest_host(&host) || pixieset::is_pixieset_host(&host))
}

/// Drop repeats while keeping first-seen order.
pub(crate) fn dedupe_in_order(urls: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    urls.into_iter().filter(|u| seen.insert(u.clone())).collect()
}

/// Log a failed fetch and fall back to an empty listing.
pub(crate) fn empty_on_error<T>(source: &'static str, result: Result<Vec<T>, GalleryError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(source, error = %e, "gallery fetch failed; returning empty list");
        Vec::new()
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
