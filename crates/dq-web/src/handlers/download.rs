//! Download handlers
//!
//! Generated data is not stored server-side; the page sends it back in the
//! query string and gets it re-served as a file.

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct JsonDownloadQuery {
    pub test_cases: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryDownloadQuery {
    pub summary: Option<String>,
}

/// GET /download/json/:timestamp?test_cases=<json>
pub async fn download_json_handler(
    Path(timestamp): Path<String>,
    Query(query): Query<JsonDownloadQuery>,
) -> Response {
    let Some(raw) = query.test_cases.filter(|s| !s.is_empty()) else {
        return (StatusCode::NOT_FOUND, "No test cases found").into_response();
    };

    let pretty = serde_json::from_str::<Value>(&raw).and_then(|v| serde_json::to_string_pretty(&v));
    match pretty {
        Ok(body) => attachment(
            body,
            "application/json",
            format!("test_cases_{}.json", sanitize(&timestamp)),
        ),
        Err(e) => {
            error!("Error downloading JSON: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// GET /download/summary/:timestamp?summary=<text>
pub async fn download_summary_handler(
    Path(timestamp): Path<String>,
    Query(query): Query<SummaryDownloadQuery>,
) -> Response {
    match query.summary.filter(|s| !s.is_empty()) {
        Some(summary) => attachment(
            summary,
            "text/plain; charset=utf-8",
            format!("test_cases_summary_{}.txt", sanitize(&timestamp)),
        ),
        None => (StatusCode::NOT_FOUND, "No summary found").into_response(),
    }
}

fn attachment(body: String, content_type: &str, filename: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Keep only filename-safe characters from the path segment
fn sanitize(timestamp: &str) -> String {
    timestamp
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("20250101_093000"), "20250101_093000");
        assert_eq!(sanitize("../etc\"/passwd\n"), "etcpasswd");
    }
}
