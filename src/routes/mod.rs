//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The marketing pages are static files served from `WEBSITE_DIR` at `/`.
//! Everything they fetch at runtime (catalog listings, case studies, the
//! blog feed, gallery sources, purchase orders, the inquiry form) lives
//! under `/api` on the same Axum router.

pub mod blog;
pub mod catalog;
pub mod dashboard;
pub mod galleries;
pub mod inquiry;
pub mod purchase_orders;
pub mod work;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/catalog", get(catalog::list_catalog))
        .route("/api/catalog/categories", get(catalog::list_categories))
        .route("/api/catalog/{id}", get(catalog::get_item))
        .route("/api/catalog/{id}/quick-view", get(catalog::quick_view))
        .route("/api/work", get(work::list_work))
        .route("/api/work/tags", get(work::list_tags))
        .route("/api/work/{slug}", get(work::get_case_study))
        .route("/api/blog", get(blog::blog_feed))
        .route("/api/process", get(blog::process_timeline))
        .route("/api/dashboard", get(dashboard::summary))
        .route(
            "/api/purchase-orders",
            get(purchase_orders::list_orders).post(purchase_orders::create_order),
        )
        .route("/api/purchase-orders/{id}", get(purchase_orders::get_order))
        .route("/api/purchase-orders/{id}/receive", post(purchase_orders::receive_order))
        .route("/api/corporate-inquiry", post(inquiry::corporate_inquiry))
        .route("/api/galleries/pinterest", get(galleries::pinterest))
        .route("/api/galleries/pixieset", get(galleries::pixieset))
        .route("/api/galleries/dropbox", get(galleries::dropbox))
        .route("/api/galleries/dropbox/folder", get(galleries::dropbox_folder))
        .route("/api/galleries/dropbox/metadata", get(galleries::dropbox_metadata))
        .route("/api/galleries/drive", get(galleries::drive))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes plus the static site as the fallback.
pub fn app(state: AppState, website_dir: &Path) -> Router {
    let website_service = ServeDir::new(website_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(website_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
