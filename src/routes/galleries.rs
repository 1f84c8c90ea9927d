//! Portfolio gallery sources.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::gallery::GalleryError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SourceQuery {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DropboxQuery {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct DriveQuery {
    pub folder_id: String,
    #[serde(default)]
    pub images_only: bool,
}

/// `GET /api/galleries/pinterest?url=`
pub async fn pinterest(State(state): State<AppState>, Query(query): Query<SourceQuery>) -> Result<Json<Value>, StatusCode> {
    let images = state
        .gallery
        .pinterest_images(&query.url)
        .await
        .map_err(gallery_error_to_status)?;
    Ok(Json(json!({ "images": images })))
}

/// `GET /api/galleries/pixieset?url=`
pub async fn pixieset(State(state): State<AppState>, Query(query): Query<SourceQuery>) -> Result<Json<Value>, StatusCode> {
    let images = state
        .gallery
        .pixieset_images(&query.url)
        .await
        .map_err(gallery_error_to_status)?;
    Ok(Json(json!({ "images": images })))
}

/// `GET /api/galleries/dropbox?path=`: image files with temporary links.
pub async fn dropbox(State(state): State<AppState>, Query(query): Query<DropboxQuery>) -> Json<Value> {
    let images = state.gallery.dropbox_images(&query.path).await;
    Json(json!({ "images": images }))
}

/// `GET /api/galleries/dropbox/folder?path=`: raw folder listing.
pub async fn dropbox_folder(State(state): State<AppState>, Query(query): Query<DropboxQuery>) -> Json<Value> {
    let entries = state.gallery.dropbox_list_folder(&query.path).await;
    Json(json!({ "entries": entries }))
}

/// `GET /api/galleries/dropbox/metadata?path=`
pub async fn dropbox_metadata(
    State(state): State<AppState>,
    Query(query): Query<DropboxQuery>,
) -> Result<Json<Value>, StatusCode> {
    let entry = state.gallery.dropbox_metadata(&query.path).await.ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "entry": entry })))
}

/// `GET /api/galleries/drive?folder_id=&images_only=`
pub async fn drive(State(state): State<AppState>, Query(query): Query<DriveQuery>) -> Result<Json<Value>, StatusCode> {
    let mut files = state
        .gallery
        .drive_files(&query.folder_id)
        .await
        .map_err(gallery_error_to_status)?;
    if query.images_only {
        files.retain(|f| f.is_image());
    }
    Ok(Json(json!({ "files": files })))
}

pub(crate) fn gallery_error_to_status(err: GalleryError) -> StatusCode {
    match err {
        GalleryError::UnsupportedSource(_) | GalleryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        GalleryError::Request(_) | GalleryError::Status { .. } | GalleryError::Parse(_) => StatusCode::BAD_GATEWAY,
        GalleryError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "galleries_test.rs"]
mod tests;
