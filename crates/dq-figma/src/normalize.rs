//! Response Normalizer
//!
//! Turns a raw HTTP status + body into an [`ApiResult`]. Only `200 OK`
//! counts as success; the payload is kept as an opaque JSON tree since the
//! Figma response shapes are not validated.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// The single status code treated as success
pub const SUCCESS_STATUS: u16 = 200;

/// Result pair: exactly one of payload or error
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    Data(Value),
    Error(String),
}

impl ApiResult {
    /// Build an error result. Empty messages are replaced so the error
    /// side is never blank.
    pub fn error(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.trim().is_empty() {
            ApiResult::Error("Error: unknown failure".to_string())
        } else {
            ApiResult::Error(msg)
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResult::Data(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiResult::Data(value) => Some(value),
            ApiResult::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResult::Data(_) => None,
            ApiResult::Error(msg) => Some(msg),
        }
    }

    /// Split into the `(payload, error)` pair
    pub fn into_pair(self) -> (Option<Value>, Option<String>) {
        match self {
            ApiResult::Data(value) => (Some(value), None),
            ApiResult::Error(msg) => (None, Some(msg)),
        }
    }
}

#[derive(Serialize)]
struct PairBody<'a> {
    data: Option<&'a Value>,
    error: Option<&'a str>,
}

impl Serialize for ApiResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PairBody {
            data: self.data(),
            error: self.error_message(),
        }
        .serialize(serializer)
    }
}

/// Normalize a status code and body into a result pair
pub fn normalize(status: u16, body: &str) -> ApiResult {
    if status != SUCCESS_STATUS {
        return ApiResult::error(format!("Error: {} - {}", status, body));
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => ApiResult::error(format!("Error: {} - empty payload", status)),
        Ok(value) => ApiResult::Data(value),
        Err(e) => ApiResult::error(format!("Error: {} - response body is not valid JSON: {}", status, e)),
    }
}
