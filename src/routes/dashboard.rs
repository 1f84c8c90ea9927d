//! Back-office dashboard summary.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::db::PurchaseOrderStore;
use crate::routes::purchase_orders::po_error_to_status;
use crate::services::purchase_order::{self, PoStatus};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub catalog_items: usize,
    pub case_studies: usize,
    pub blog_posts: usize,
    pub purchase_orders: HashMap<PoStatus, usize>,
}

/// `GET /api/dashboard`
pub async fn summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, StatusCode> {
    let orders = state.purchase_orders.list().await.map_err(po_error_to_status)?;
    Ok(Json(DashboardSummary {
        catalog_items: state.content.catalog.len(),
        case_studies: state.content.case_studies.len(),
        blog_posts: state.content.blog.len(),
        purchase_orders: purchase_order::status_counts(&orders),
    }))
}
