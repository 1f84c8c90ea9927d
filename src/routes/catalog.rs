//! Catalog browsing routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::content::CatalogItem;
use crate::services::catalog::{self, CatalogError, Page};
use crate::services::quick_view::{self, Placement, QuickViewError};
use crate::state::AppState;

const DEFAULT_COLUMNS: usize = 4;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuickViewQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub columns: Option<usize>,
    pub viewport_width: Option<u32>,
}

#[derive(Serialize)]
pub struct QuickViewResponse {
    pub item: CatalogItem,
    pub index: usize,
    pub placement: Placement,
}

/// `GET /api/catalog`: filtered, paginated catalog.
pub async fn list_catalog(State(state): State<AppState>, Query(query): Query<CatalogQuery>) -> Json<Page<CatalogItem>> {
    let hits = catalog::filter_catalog(&state.content.catalog, query.category.as_deref(), query.q.as_deref());
    let page = catalog::paginate(&hits, query.page, query.per_page);
    Json(Page {
        items: page.items.into_iter().cloned().collect(),
        page: page.page,
        per_page: page.per_page,
        total: page.total,
        total_pages: page.total_pages,
    })
}

/// `GET /api/catalog/categories`
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(catalog::categories(&state.content.catalog))
}

/// `GET /api/catalog/:id`
pub async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<CatalogItem>, StatusCode> {
    let item = catalog::find_item(&state.content.catalog, &id).map_err(catalog_error_to_status)?;
    Ok(Json(item.clone()))
}

/// `GET /api/catalog/:id/quick-view`: where to open the quick-view panel
/// for `id` within the grid produced by the same `category`/`q` filter.
pub async fn quick_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<QuickViewQuery>,
) -> Result<Json<QuickViewResponse>, StatusCode> {
    let hits = catalog::filter_catalog(&state.content.catalog, query.category.as_deref(), query.q.as_deref());
    let Some(index) = hits.iter().position(|item| item.id == id) else {
        return Err(StatusCode::NOT_FOUND);
    };

    let columns = query
        .columns
        .or_else(|| query.viewport_width.map(quick_view::columns_for_width))
        .unwrap_or(DEFAULT_COLUMNS);
    let placement = quick_view::quick_view_placement(index, hits.len(), columns).map_err(quick_view_error_to_status)?;

    Ok(Json(QuickViewResponse { item: hits[index].clone(), index, placement }))
}

pub(crate) fn catalog_error_to_status(err: CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

pub(crate) fn quick_view_error_to_status(err: QuickViewError) -> StatusCode {
    match err {
        QuickViewError::NoColumns => StatusCode::BAD_REQUEST,
        QuickViewError::OutOfRange { .. } => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
