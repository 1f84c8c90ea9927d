//! Google Drive folder listing.

use serde::{Deserialize, Serialize};

use super::{GalleryClient, GalleryError, empty_on_error, read_body};

const FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const FIELDS: &str = "nextPageToken,files(id,name,mimeType,thumbnailLink,webContentLink)";
const PAGE_SIZE: &str = "1000";
const MAX_PAGES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
    #[serde(default)]
    pub web_content_link: Option<String>,
}

impl DriveFile {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFilesPage {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Drive ids are URL-safe base64-ish; anything else would let a caller
/// rewrite the `q` expression.
pub fn validate_folder_id(folder_id: &str) -> Result<&str, GalleryError> {
    let id = folder_id.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(GalleryError::InvalidInput(format!("invalid Drive folder id: {folder_id:?}")));
    }
    Ok(id)
}

#[must_use]
pub fn folder_query(folder_id: &str) -> String {
    format!("'{folder_id}' in parents and trashed=false")
}

pub fn parse_files_page(json: &str) -> Result<DriveFilesPage, GalleryError> {
    serde_json::from_str(json).map_err(|e| GalleryError::Parse(e.to_string()))
}

impl GalleryClient {
    async fn try_drive_files(&self, folder_id: &str) -> Result<Vec<DriveFile>, GalleryError> {
        let Some(key) = &self.drive_api_key else {
            return Err(GalleryError::InvalidInput("GOOGLE_DRIVE_API_KEY is not set".into()));
        };
        let q = folder_query(folder_id);

        let mut files = Vec::new();
        let mut page_token: Option<String> = None;
        for _ in 0..MAX_PAGES {
            let mut params = vec![
                ("q", q.as_str()),
                ("key", key.as_str()),
                ("fields", FIELDS),
                ("pageSize", PAGE_SIZE),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }

            let response = self
                .http
                .get(FILES_URL)
                .query(&params)
                .send()
                .await
                .map_err(|e| GalleryError::Request(e.to_string()))?;
            let mut page = parse_files_page(&read_body(response).await?)?;
            files.append(&mut page.files);

            match page.next_page_token {
                Some(next) => page_token = Some(next),
                None => return Ok(files),
            }
        }
        tracing::warn!(folder_id, "drive listing truncated");
        Ok(files)
    }

    /// Files directly inside a Drive folder.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed folder id. Everything else
    /// is logged and produces an empty list.
    pub async fn drive_files(&self, folder_id: &str) -> Result<Vec<DriveFile>, GalleryError> {
        let folder_id = validate_folder_id(folder_id)?;
        Ok(empty_on_error("drive", self.try_drive_files(folder_id).await))
    }
}

#[cfg(test)]
#[path = "drive_test.rs"]
mod tests;
