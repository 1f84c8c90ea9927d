//! Blog card feed for the infinite-scroll listing.

use serde::Serialize;

use crate::content::{BlogCard, has_tag};

pub const DEFAULT_BATCH: usize = 6;
pub const MAX_BATCH: usize = 24;

#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    pub items: Vec<BlogCard>,
    pub offset: usize,
    /// Offset for the next scroll batch; `None` once the feed is exhausted.
    pub next_offset: Option<usize>,
    pub total: usize,
}

#[must_use]
pub fn blog_feed(cards: &[BlogCard], tag: Option<&str>, offset: usize, limit: Option<usize>) -> Feed {
    let limit = limit.unwrap_or(DEFAULT_BATCH).clamp(1, MAX_BATCH);
    let tag = tag.map(str::trim).filter(|t| !t.is_empty());

    let matching: Vec<&BlogCard> = cards
        .iter()
        .filter(|c| tag.is_none_or(|t| has_tag(&c.tags, t)))
        .collect();
    let total = matching.len();

    let items: Vec<BlogCard> = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    let end = offset.saturating_add(items.len());
    let next_offset = (end < total).then_some(end);

    Feed { items, offset, next_offset, total }
}

#[cfg(test)]
#[path = "blog_test.rs"]
mod tests;
