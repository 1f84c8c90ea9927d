//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Catalog items, case studies, blog cards, and the "how it works" timeline
//! are authored as YAML under `content/` and compiled into the binary. They
//! are parsed once at startup and shared read-only through `AppState`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const CATALOG_YAML: &str = include_str!("../../content/catalog.yaml");
const CASE_STUDIES_YAML: &str = include_str!("../../content/case_studies.yaml");
const BLOG_YAML: &str = include_str!("../../content/blog.yaml");
const TIMELINE_YAML: &str = include_str!("../../content/timeline.yaml");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("duplicate {kind} id: {id}")]
    Duplicate { kind: &'static str, id: String },
    #[error("timeline steps must be numbered 1..={expected_last}, found {found} at position {position}")]
    TimelineOrder { expected_last: usize, found: u32, position: usize },
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: u32,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudySection {
    pub heading: String,
    pub body: String,
}

/// Per-slug content for a "Merch We Made" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub slug: String,
    pub title: String,
    pub client: String,
    pub summary: String,
    pub hero_image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sections: Vec<CaseStudySection>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO date (`YYYY-MM-DD`), so lexical order is chronological.
    pub published_on: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

// =============================================================================
// CONTENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct Content {
    pub catalog: Vec<CatalogItem>,
    pub case_studies: Vec<CaseStudy>,
    /// Sorted newest first.
    pub blog: Vec<BlogCard>,
    pub timeline: Vec<TimelineStep>,
}

impl Content {
    /// Parse and validate the content bundled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if any file fails to parse or validate.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_yaml(CATALOG_YAML, CASE_STUDIES_YAML, BLOG_YAML, TIMELINE_YAML)
    }

    /// Parse and validate content from explicit YAML documents.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML, duplicate ids or slugs, or a
    /// timeline that is not numbered `1..=n` in order.
    pub fn from_yaml(catalog: &str, case_studies: &str, blog: &str, timeline: &str) -> Result<Self, ContentError> {
        let catalog: Vec<CatalogItem> = parse("catalog.yaml", catalog)?;
        let case_studies: Vec<CaseStudy> = parse("case_studies.yaml", case_studies)?;
        let mut blog: Vec<BlogCard> = parse("blog.yaml", blog)?;
        let timeline: Vec<TimelineStep> = parse("timeline.yaml", timeline)?;

        ensure_unique("catalog", catalog.iter().map(|i| i.id.as_str()))?;
        ensure_unique("case study", case_studies.iter().map(|c| c.slug.as_str()))?;
        ensure_unique("blog", blog.iter().map(|b| b.id.as_str()))?;

        for (position, step) in timeline.iter().enumerate() {
            if usize::try_from(step.step).ok() != Some(position + 1) {
                return Err(ContentError::TimelineOrder { expected_last: timeline.len(), found: step.step, position });
            }
        }

        blog.sort_by(|a, b| b.published_on.cmp(&a.published_on).then_with(|| a.id.cmp(&b.id)));

        Ok(Self { catalog, case_studies, blog, timeline })
    }
}

fn parse<T>(file: &'static str, raw: &str) -> Result<Vec<T>, ContentError>
where
    T: serde::de::DeserializeOwned,
{
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(raw).map_err(|source| ContentError::Parse { file, source })
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::Duplicate { kind, id: id.to_owned() });
        }
    }
    Ok(())
}

/// Case-insensitive membership test used by the tag filters. Uses the same
/// Unicode lowercasing as tag sorting and catalog search.
#[must_use]
pub fn has_tag(tags: &[String], wanted: &str) -> bool {
    let wanted = wanted.to_lowercase();
    tags.iter().any(|t| t.to_lowercase() == wanted)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
