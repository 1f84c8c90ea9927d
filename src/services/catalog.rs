//! Catalog browsing: category + search filtering and pagination.

use serde::Serialize;

use crate::content::CatalogItem;

pub const DEFAULT_PER_PAGE: usize = 12;
pub const MAX_PER_PAGE: usize = 48;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog item not found: {0}")]
    NotFound(String),
}

/// One page of a filtered listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

fn category_matches(item: &CatalogItem, category: Option<&str>) -> bool {
    match category.map(str::trim) {
        None | Some("") => true,
        Some(c) if c.eq_ignore_ascii_case("all") => true,
        Some(c) => item.category.eq_ignore_ascii_case(c),
    }
}

fn search_matches(item: &CatalogItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Items matching both the category and the search term, in source order.
#[must_use]
pub fn filter_catalog<'a>(items: &'a [CatalogItem], category: Option<&str>, q: Option<&str>) -> Vec<&'a CatalogItem> {
    let needle = q.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    items
        .iter()
        .filter(|item| category_matches(item, category) && search_matches(item, &needle))
        .collect()
}

/// Slice `items` into a 1-based page. Out-of-range pages come back empty
/// with the totals intact.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: Option<usize>, per_page: Option<usize>) -> Page<T> {
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    let page = page.unwrap_or(1).max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let slice = if start >= total { &[][..] } else { &items[start..(start + per_page).min(total)] };

    Page { items: slice.to_vec(), page, per_page, total, total_pages }
}

/// Distinct categories, sorted.
#[must_use]
pub fn categories(items: &[CatalogItem]) -> Vec<String> {
    let mut out: Vec<String> = items.iter().map(|i| i.category.clone()).collect();
    out.sort();
    out.dedup();
    out
}

pub fn find_item<'a>(items: &'a [CatalogItem], id: &str) -> Result<&'a CatalogItem, CatalogError> {
    items
        .iter()
        .find(|i| i.id == id)
        .ok_or_else(|| CatalogError::NotFound(id.to_owned()))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
