//! Dropbox folder listing for galleries hosted in a shared Dropbox.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{GalleryClient, GalleryError, empty_on_error, read_body};

const API_BASE: &str = "https://api.dropboxapi.com/2";
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic"];
/// Upper bound on `list_folder/continue` round trips for one listing.
const MAX_CONTINUE_PAGES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropboxEntry {
    #[serde(rename = ".tag")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub path_lower: Option<String>,
    #[serde(default)]
    pub path_display: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub client_modified: Option<String>,
}

impl DropboxEntry {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind == "file" && is_image_name(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListFolderPage {
    pub entries: Vec<DropboxEntry>,
    pub cursor: String,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropboxImage {
    pub name: String,
    pub path: String,
    pub link: String,
}

#[derive(Deserialize)]
struct TemporaryLink {
    link: String,
}

#[must_use]
pub fn is_image_name(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Dropbox addresses the root folder as `""`, not `"/"`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

pub fn parse_list_folder(json: &str) -> Result<ListFolderPage, GalleryError> {
    serde_json::from_str(json).map_err(|e| GalleryError::Parse(e.to_string()))
}

pub fn parse_metadata(json: &str) -> Result<DropboxEntry, GalleryError> {
    serde_json::from_str(json).map_err(|e| GalleryError::Parse(e.to_string()))
}

pub fn parse_temporary_link(json: &str) -> Result<String, GalleryError> {
    serde_json::from_str::<TemporaryLink>(json)
        .map(|t| t.link)
        .map_err(|e| GalleryError::Parse(e.to_string()))
}

impl GalleryClient {
    async fn dropbox_rpc(&self, endpoint: &str, body: serde_json::Value) -> Result<String, GalleryError> {
        let Some(token) = &self.dropbox_token else {
            return Err(GalleryError::InvalidInput("DROPBOX_ACCESS_TOKEN is not set".into()));
        };
        let response = self
            .http
            .post(format!("{API_BASE}/{endpoint}"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GalleryError::Request(e.to_string()))?;
        read_body(response).await
    }

    async fn try_list_folder(&self, path: &str) -> Result<Vec<DropboxEntry>, GalleryError> {
        let first = self
            .dropbox_rpc("files/list_folder", json!({ "path": normalize_path(path), "recursive": false }))
            .await?;
        let mut page = parse_list_folder(&first)?;
        let mut entries = std::mem::take(&mut page.entries);

        let mut round_trips = 0;
        while page.has_more && round_trips < MAX_CONTINUE_PAGES {
            let next = self
                .dropbox_rpc("files/list_folder/continue", json!({ "cursor": page.cursor }))
                .await?;
            page = parse_list_folder(&next)?;
            entries.append(&mut page.entries);
            round_trips += 1;
        }
        if page.has_more {
            tracing::warn!(path, pages = round_trips + 1, "dropbox listing truncated");
        }
        Ok(entries)
    }

    /// Entries directly under `path`. Empty when Dropbox is not configured
    /// or the call fails.
    pub async fn dropbox_list_folder(&self, path: &str) -> Vec<DropboxEntry> {
        empty_on_error("dropbox", self.try_list_folder(path).await)
    }

    async fn try_metadata(&self, path: &str) -> Result<DropboxEntry, GalleryError> {
        let body = self
            .dropbox_rpc("files/get_metadata", json!({ "path": normalize_path(path) }))
            .await?;
        parse_metadata(&body)
    }

    async fn try_temporary_link(&self, path: &str) -> Result<String, GalleryError> {
        let body = self
            .dropbox_rpc("files/get_temporary_link", json!({ "path": normalize_path(path) }))
            .await?;
        parse_temporary_link(&body)
    }

    /// Metadata for a single path, `None` on failure.
    pub async fn dropbox_metadata(&self, path: &str) -> Option<DropboxEntry> {
        match self.try_metadata(path).await {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(path, error = %e, "dropbox metadata lookup failed");
                None
            }
        }
    }

    /// Short-lived direct download link for a file, `None` on failure.
    pub async fn dropbox_temporary_link(&self, path: &str) -> Option<String> {
        match self.try_temporary_link(path).await {
            Ok(link) => Some(link),
            Err(e) => {
                tracing::warn!(path, error = %e, "dropbox temporary link failed");
                None
            }
        }
    }

    /// Image files under `path` with their temporary links resolved
    /// concurrently. Files whose link cannot be resolved are skipped.
    pub async fn dropbox_images(&self, path: &str) -> Vec<DropboxImage> {
        let images: Vec<DropboxEntry> = self
            .dropbox_list_folder(path)
            .await
            .into_iter()
            .filter(DropboxEntry::is_image)
            .collect();

        let lookups = images.iter().map(|entry| {
            let file_path = entry
                .path_lower
                .clone()
                .unwrap_or_else(|| format!("{}/{}", normalize_path(path), entry.name));
            async move {
                let link = self.dropbox_temporary_link(&file_path).await;
                link.map(|link| DropboxImage { name: entry.name.clone(), path: file_path, link })
            }
        });

        futures::future::join_all(lookups)
            .await
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
#[path = "dropbox_test.rs"]
mod tests;
