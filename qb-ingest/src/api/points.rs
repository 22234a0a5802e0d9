//! Point denomination endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use qb_common::ALLOWED_POINTS;
use serde::{Deserialize, Serialize};

use crate::services::snap_points;
use crate::{ApiResult, AppState};

/// Allowed point values and the configured default
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub allowed_points: Vec<u32>,
    pub default_points: u32,
}

/// Snap request
#[derive(Debug, Deserialize)]
pub struct SnapRequest {
    pub value: f64,
}

/// Snap response
#[derive(Debug, Serialize)]
pub struct SnapResponse {
    pub points: u32,
}

/// GET /api/points
pub async fn get_points(State(state): State<AppState>) -> Json<PointsResponse> {
    Json(PointsResponse {
        allowed_points: ALLOWED_POINTS.to_vec(),
        default_points: state.normalizer.default_points(),
    })
}

/// POST /api/points/snap
///
/// JSON cannot carry NaN or infinity, so `value` is always finite here.
pub async fn snap_point_value(
    payload: Result<Json<SnapRequest>, JsonRejection>,
) -> ApiResult<Json<SnapResponse>> {
    let Json(request) = payload?;
    Ok(Json(SnapResponse {
        points: snap_points(request.value),
    }))
}

/// Build point routes
pub fn point_routes() -> Router<AppState> {
    Router::new()
        .route("/api/points", get(get_points))
        .route("/api/points/snap", post(snap_point_value))
}
