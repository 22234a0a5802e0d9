//! Assignee resolution endpoint

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use qb_common::{MatchTier, MemberDescriptor};
use serde::{Deserialize, Serialize};

use crate::services::resolve_with_tier;
use crate::{ApiResult, AppState};

/// Resolve request: candidate name plus the family roster in tie-break order
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
}

/// Resolve response; both fields are null when nothing matched
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub member_id: Option<String>,
    pub tier: Option<MatchTier>,
}

/// POST /api/assignees/resolve
pub async fn resolve_assignee(
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> ApiResult<Json<ResolveResponse>> {
    let Json(request) = payload?;
    let resolved = resolve_with_tier(request.name.as_deref(), &request.members);

    Ok(Json(ResolveResponse {
        member_id: resolved.map(|(id, _)| id.to_string()),
        tier: resolved.map(|(_, tier)| tier),
    }))
}

/// Build assignee routes
pub fn assignee_routes() -> Router<AppState> {
    Router::new().route("/api/assignees/resolve", post(resolve_assignee))
}
