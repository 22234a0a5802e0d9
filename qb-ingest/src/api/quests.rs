//! Quest normalization endpoint
//!
//! Called by the quest creation flow between AI extraction and persistence.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use qb_common::{ExtractedQuest, MemberDescriptor, NormalizedQuest};
use serde::Deserialize;
use tracing::info;

use crate::{ApiResult, AppState};

/// Normalize request
#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub quest: ExtractedQuest,
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
}

/// POST /api/quests/normalize
pub async fn normalize_quest(
    State(state): State<AppState>,
    payload: Result<Json<NormalizeRequest>, JsonRejection>,
) -> ApiResult<Json<NormalizedQuest>> {
    let Json(request) = payload?;
    let normalized = state.normalizer.normalize(request.quest, &request.members)?;

    info!(
        title = %normalized.title,
        points = normalized.points,
        assigned_to = normalized.assigned_to.as_deref().unwrap_or("-"),
        "Quest normalized"
    );

    Ok(Json(normalized))
}

/// Build quest routes
pub fn quest_routes() -> Router<AppState> {
    Router::new().route("/api/quests/normalize", post(normalize_quest))
}
