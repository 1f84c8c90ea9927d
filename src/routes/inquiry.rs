//! Corporate inquiry form endpoint.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::services::inquiry::{self, InquiryError, InquiryRequest};
use crate::state::AppState;

/// `POST /api/corporate-inquiry`: validate and forward by email.
///
/// Responds `{"success": true, "id": ...}` on delivery, otherwise
/// `{"error": ...}` with 400 for bad input (including a body that is not
/// the expected JSON) or 500 for a missing or failing email provider.
pub async fn corporate_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<InquiryRequest>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "corporate inquiry body rejected");
            let message = format!("Invalid request body: {}", rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response();
        }
    };

    match inquiry::submit_inquiry(state.mailer.as_deref(), body).await {
        Ok(id) => (StatusCode::OK, Json(json!({ "success": true, "id": id }))).into_response(),
        Err(e) => {
            let status = inquiry_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "corporate inquiry failed");
            }
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

pub(crate) fn inquiry_error_to_status(err: &InquiryError) -> StatusCode {
    match err {
        InquiryError::MissingRequired | InquiryError::InvalidEmail => StatusCode::BAD_REQUEST,
        InquiryError::NotConfigured | InquiryError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod tests;
