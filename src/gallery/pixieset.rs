//! Pixieset client-gallery scraping.

use std::sync::LazyLock;

use regex::Regex;

use super::{GalleryClient, GalleryError, dedupe_in_order, empty_on_error, parse_source_url};

/// Image URLs on the Pixieset CDN. Matches absolute, protocol-relative, and
/// JSON-escaped (`\/`) forms.
static PIXIESET_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?:)?(?:\\?/){2}images\.pixieset\.com(?:\\?/[A-Za-z0-9_\-]+)+\.(?:jpe?g|png|webp)")
        .expect("pixieset image pattern is valid")
});

static SIZE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-(?:thumb|small|medium|large|xlarge|xxlarge)\.(jpe?g|png|webp)$").expect("size suffix pattern is valid")
});

#[must_use]
pub fn is_pixieset_host(host: &str) -> bool {
    host.ends_with(".pixieset.com") && host.len() > ".pixieset.com".len()
}

fn normalize(raw: &str) -> String {
    let unescaped = raw.replace("\\/", "/");
    let absolute = match unescaped.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => unescaped.replacen("http://", "https://", 1),
    };
    SIZE_SUFFIX.replace(&absolute, "-xxlarge.$1").into_owned()
}

/// Largest-variant image URLs found in a gallery page, first-seen order.
#[must_use]
pub fn extract_pixieset_images(html: &str) -> Vec<String> {
    dedupe_in_order(PIXIESET_IMAGE.find_iter(html).map(|m| normalize(m.as_str())))
}

impl GalleryClient {
    /// Scrape a public Pixieset gallery.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSource` if `gallery_url` is not on `pixieset.com`.
    /// Fetch failures are logged and produce an empty list.
    pub async fn pixieset_images(&self, gallery_url: &str) -> Result<Vec<String>, GalleryError> {
        let url = parse_source_url(gallery_url, is_pixieset_host)?;
        let html = self.fetch_html(&url).await;
        Ok(empty_on_error("pixieset", html.map(|h| extract_pixieset_images(&h))))
    }
}

#[cfg(test)]
#[path = "pixieset_test.rs"]
mod tests;
