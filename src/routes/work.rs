//! Case-study ("Merch We Made") routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::content::CaseStudy;
use crate::services::work::{self, WorkError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct WorkQuery {
    /// Comma-separated; a card must carry every listed tag.
    pub tags: Option<String>,
}

/// `GET /api/work`
pub async fn list_work(State(state): State<AppState>, Query(query): Query<WorkQuery>) -> Json<Vec<CaseStudy>> {
    let selected = query.tags.as_deref().map(work::parse_tag_list).unwrap_or_default();
    let cards = work::filter_by_tags(&state.content.case_studies, &selected);
    Json(cards.into_iter().cloned().collect())
}

/// `GET /api/work/tags`
pub async fn list_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(work::all_tags(&state.content.case_studies))
}

/// `GET /api/work/:slug`
pub async fn get_case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CaseStudy>, StatusCode> {
    let study = work::find_case_study(&state.content.case_studies, &slug).map_err(work_error_to_status)?;
    Ok(Json(study.clone()))
}

pub(crate) fn work_error_to_status(err: WorkError) -> StatusCode {
    match err {
        WorkError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}
