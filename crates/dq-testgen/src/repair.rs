//! Best-effort repair of model output into JSON
//!
//! Stages run in a fixed order and the first one that parses wins:
//!
//! 1. strict parse of the whole text
//! 2. parse of the span from the first `{` to the last `}`
//! 3. the fixed fallback document
//!
//! This does not balance braces or recover truncated output; text with
//! stray braces around non-JSON content simply falls through to stage 3.

use serde_json::{json, Value};
use std::fmt;
use tracing::{info, warn};

/// Name of the single component in the fallback document
pub const FALLBACK_COMPONENT: &str = "error-fallback";

/// Which stage produced the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairStage {
    Strict,
    Extracted,
    Fallback,
}

impl fmt::Display for RepairStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepairStage::Strict => write!(f, "strict"),
            RepairStage::Extracted => write!(f, "extracted"),
            RepairStage::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Repaired {
    pub value: Value,
    pub stage: RepairStage,
}

/// Coerce raw completion text into a JSON value. Never fails.
pub fn repair(raw: &str) -> Repaired {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Repaired {
            value,
            stage: RepairStage::Strict,
        };
    }

    info!("Cleaning malformed JSON response");

    if let Some(candidate) = brace_span(raw) {
        if let Ok(value) = serde_json::from_str::<Value>(candidate) {
            return Repaired {
                value,
                stage: RepairStage::Extracted,
            };
        }
    }

    warn!("Falling back to minimal structure");
    Repaired {
        value: fallback_document(),
        stage: RepairStage::Fallback,
    }
}

/// Span from the first `{` through the last `}`, if both exist in order
fn brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}

/// Placeholder document standing in for unusable model output
pub fn fallback_document() -> Value {
    json!({
        "components": [
            {
                "parent_component": FALLBACK_COMPONENT,
                "sub_components": [
                    {
                        "summary": "Error in test case generation",
                        "priority": "P1",
                        "tags": ["Error"],
                        "test_cases": [
                            {
                                "action": "Check system response",
                                "expected_result": "System should handle errors gracefully"
                            }
                        ]
                    }
                ]
            }
        ]
    })
}
