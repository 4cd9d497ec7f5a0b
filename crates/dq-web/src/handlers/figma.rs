//! Figma explorer handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use dq_figma::{ApiResult, Endpoint, QueryParams};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;

/// Query key carrying the path parameter; every other key is forwarded
pub const PARAM_KEY: &str = "param";

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub key: &'static str,
    pub template: &'static str,
    pub param: Option<&'static str>,
}

/// GET /api/figma/endpoints - List the endpoint registry
pub async fn list_endpoints_handler() -> Json<Vec<EndpointInfo>> {
    Json(
        Endpoint::ALL
            .iter()
            .map(|e| EndpointInfo {
                key: e.key(),
                template: e.template(),
                param: e.param_hint(),
            })
            .collect(),
    )
}

/// GET /api/figma/:endpoint?param=<id>&<query> - Fetch from Figma
///
/// Always answers with the `{data, error}` pair: 200 on success, 400 for an
/// unknown endpoint or missing parameter, 502 when Figma reports an error.
pub async fn fetch_handler(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let (param, query) = split_param(pairs);

    let endpoint = match key.parse::<Endpoint>().and_then(|e| e.path(&param).map(|_| e)) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            warn!("Rejected Figma request: {}", e);
            return (StatusCode::BAD_REQUEST, Json(ApiResult::error(e.to_string()))).into_response();
        }
    };

    let query = (!query.is_empty()).then_some(query);
    let result = state
        .figma
        .fetch_endpoint(endpoint, &param, query.as_ref())
        .await;

    let status = if result.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(result)).into_response()
}

/// Pull `param` out of the query pairs, keeping the rest in order
fn split_param(pairs: Vec<(String, String)>) -> (String, QueryParams) {
    let mut param = String::new();
    let mut rest = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        if key == PARAM_KEY {
            param = value;
        } else {
            rest.push((key, value));
        }
    }
    (param, rest)
}
