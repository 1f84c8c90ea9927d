//! Pinterest board scraping.

use std::sync::LazyLock;

use regex::Regex;

use super::{GalleryClient, GalleryError, dedupe_in_order, empty_on_error, parse_source_url};

/// `i.pinimg.com/<size>/aa/bb/cc/<hash>.<ext>`, tolerating JSON-escaped slashes.
static PIN_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?:(?:\\?/){2}i\.pinimg\.com\\?/(?:\d+x\d*|originals)((?:\\?/[0-9a-f]{2}){3}\\?/[0-9a-f]+\.(?:jpe?g|png|gif|webp))",
    )
    .expect("pinterest image pattern is valid")
});

#[must_use]
pub fn is_pinterest_host(host: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    let Some(i) = labels.iter().position(|l| *l == "pinterest") else {
        return false;
    };
    // pinterest.com, www.pinterest.de, uk.pinterest.co.uk, br.pinterest.com.br
    match &labels[i + 1..] {
        [tld] => !tld.is_empty(),
        [second, tld] => matches!(*second, "co" | "com") && !tld.is_empty(),
        _ => false,
    }
}

/// Full-size image URLs found in a board page, first-seen order.
#[must_use]
pub fn extract_pinterest_images(html: &str) -> Vec<String> {
    dedupe_in_order(PIN_IMAGE.captures_iter(html).map(|caps| {
        let rest = caps[1].replace("\\/", "/");
        format!("https://i.pinimg.com/originals{rest}")
    }))
}

impl GalleryClient {
    /// Scrape a public Pinterest board.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSource` if `board_url` is not a Pinterest URL.
    /// Fetch failures are logged and produce an empty list.
    pub async fn pinterest_images(&self, board_url: &str) -> Result<Vec<String>, GalleryError> {
        let url = parse_source_url(board_url, is_pinterest_host)?;
        let html = self.fetch_html(&url).await;
        Ok(empty_on_error("pinterest", html.map(|h| extract_pinterest_images(&h))))
    }
}

#[cfg(test)]
#[path = "pinterest_test.rs"]
mod tests;
