//! Blog feed and "how it works" timeline.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::content::TimelineStep;
use crate::services::blog::{self, Feed};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub tag: Option<String>,
    #[serde(default)]
    pub offset: usize,
    pub limit: Option<usize>,
}

/// `GET /api/blog`: one infinite-scroll batch.
pub async fn blog_feed(State(state): State<AppState>, Query(query): Query<FeedQuery>) -> Json<Feed> {
    Json(blog::blog_feed(&state.content.blog, query.tag.as_deref(), query.offset, query.limit))
}

/// `GET /api/process`
pub async fn process_timeline(State(state): State<AppState>) -> Json<Vec<TimelineStep>> {
    Json(state.content.timeline.clone())
}
