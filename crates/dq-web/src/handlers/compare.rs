//! Design comparison handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use dq_testgen::ComparisonRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::state::AppState;

/// POST /api/compare - Test cases for design vs website differences
pub async fn compare_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ComparisonRequest>,
) -> Response {
    match state.comparator.compare(&request).await {
        Ok(text) => Json(json!({
            "element": request.element,
            "differing": request.differing_properties(),
            "test_cases": text,
        }))
        .into_response(),
        Err(e) => {
            error!("Design comparison failed: {:#}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": format!("{:#}", e) })),
            )
                .into_response()
        }
    }
}
