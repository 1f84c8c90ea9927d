//! Case-study ("Merch We Made") listing and tag filtering.

use crate::content::{CaseStudy, has_tag};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorkError {
    #[error("case study not found: {0}")]
    NotFound(String),
}

/// Split a comma-separated tag list, dropping blanks.
#[must_use]
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Every tag used by any case study, sorted case-insensitively. When two
/// studies spell a tag differently the first spelling wins.
#[must_use]
pub fn all_tags(studies: &[CaseStudy]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in studies.iter().flat_map(|s| s.tags.iter()) {
        if !has_tag(&tags, tag) {
            tags.push(tag.clone());
        }
    }
    tags.sort_by_key(|t| t.to_lowercase());
    tags
}

/// Studies carrying every selected tag. No selection means no filtering.
#[must_use]
pub fn filter_by_tags<'a>(studies: &'a [CaseStudy], selected: &[String]) -> Vec<&'a CaseStudy> {
    studies
        .iter()
        .filter(|s| selected.iter().all(|tag| has_tag(&s.tags, tag)))
        .collect()
}

pub fn find_case_study<'a>(studies: &'a [CaseStudy], slug: &str) -> Result<&'a CaseStudy, WorkError> {
    studies
        .iter()
        .find(|s| s.slug == slug)
        .ok_or_else(|| WorkError::NotFound(slug.to_owned()))
}

#[cfg(test)]
#[path = "work_test.rs"]
mod tests;
