//! Purchase-order receiving routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::PurchaseOrderStore;
use crate::services::purchase_order::{self, NewPurchaseOrder, PurchaseOrder, PurchaseOrderError, Receipt};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReceiveBody {
    pub receipts: Vec<Receipt>,
}

/// `GET /api/purchase-orders`
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<PurchaseOrder>>, StatusCode> {
    let orders = state.purchase_orders.list().await.map_err(po_error_to_status)?;
    Ok(Json(orders))
}

/// `POST /api/purchase-orders`
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<NewPurchaseOrder>,
) -> Result<(StatusCode, Json<PurchaseOrder>), StatusCode> {
    let order = purchase_order::create_order(state.purchase_orders.as_ref(), body)
        .await
        .map_err(po_error_to_status)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /api/purchase-orders/:id`
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PurchaseOrder>, StatusCode> {
    let order = state.purchase_orders.get(id).await.map_err(po_error_to_status)?;
    Ok(Json(order))
}

/// `POST /api/purchase-orders/:id/receive`
pub async fn receive_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ReceiveBody>,
) -> Result<Json<PurchaseOrder>, StatusCode> {
    let order = purchase_order::receive_order(state.purchase_orders.as_ref(), id, &body.receipts)
        .await
        .map_err(po_error_to_status)?;
    Ok(Json(order))
}

pub(crate) fn po_error_to_status(err: PurchaseOrderError) -> StatusCode {
    match err {
        PurchaseOrderError::NotFound(_) => StatusCode::NOT_FOUND,
        PurchaseOrderError::Invalid(_) | PurchaseOrderError::UnknownSku(_) => StatusCode::BAD_REQUEST,
        PurchaseOrderError::DuplicatePoNumber(_) | PurchaseOrderError::OverReceipt { .. } => StatusCode::CONFLICT,
        PurchaseOrderError::Corrupt(e) => {
            tracing::error!(error = %e, "stored purchase order could not be decoded");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        PurchaseOrderError::Database(e) => {
            tracing::error!(error = %e, "purchase order storage failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "purchase_orders_test.rs"]
mod tests;
