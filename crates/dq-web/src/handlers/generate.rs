//! Test case generation handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub ui_description: Option<String>,
    #[serde(default)]
    pub srs_description: Option<String>,
}

/// POST /generate - Generate test cases from UI and SRS descriptions
///
/// 400 when either description is empty, 500 with the message for any
/// other failure. A body that is not a valid request keeps the rejection's
/// status but answers with the same `{"error"}` shape.
pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected generate request: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let ui = request.ui_description.unwrap_or_default();
    let srs = request.srs_description.unwrap_or_default();

    info!("Generating test cases...");

    match state.generator.generate_report(&ui, &srs).await {
        Ok(result) => {
            info!(
                "Generated {} test cases across {} components",
                result.test_cases.total_test_cases(),
                result.test_cases.components.len()
            );
            Json(result).into_response()
        }
        Err(e) if e.is_client_error() => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            error!("Error processing request: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
