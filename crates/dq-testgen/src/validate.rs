//! Structural validation of generated documents
//!
//! Every level must carry its required keys. Missing keys are reported,
//! never filled in.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::document::{Priority, TestCaseDocument};

const COMPONENT_KEYS: [&str; 2] = ["parent_component", "sub_components"];
const SUB_COMPONENT_KEYS: [&str; 4] = ["summary", "priority", "tags", "test_cases"];
const TEST_CASE_KEYS: [&str; 2] = ["action", "expected_result"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid test case structure: document must be a JSON object")]
    NotAnObject,

    #[error("Invalid test case structure: missing required key '{key}' at {path}")]
    MissingKey { path: String, key: &'static str },

    #[error("Invalid test case structure: {path} must be {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("Invalid priority '{value}' at {path}: expected P1, P2 or P3")]
    InvalidPriority { path: String, value: String },

    #[error("Invalid test case structure: {0}")]
    Malformed(String),
}

/// Check the document shape without converting it
pub fn validate_structure(value: &Value) -> Result<(), ValidationError> {
    let root = value.as_object().ok_or(ValidationError::NotAnObject)?;
    let components = required_array(root, "$", "components")?;

    for (i, component) in components.iter().enumerate() {
        let path = format!("components[{}]", i);
        let component = as_object(component, &path)?;
        require_keys(component, &path, &COMPONENT_KEYS)?;
        required_str(component, &path, "parent_component")?;

        let subs = required_array(component, &path, "sub_components")?;
        for (j, sub) in subs.iter().enumerate() {
            let sub_path = format!("{}.sub_components[{}]", path, j);
            validate_sub_component(sub, &sub_path)?;
        }
    }

    Ok(())
}

fn validate_sub_component(sub: &Value, path: &str) -> Result<(), ValidationError> {
    let sub = as_object(sub, path)?;
    require_keys(sub, path, &SUB_COMPONENT_KEYS)?;
    required_str(sub, path, "summary")?;

    let priority = required_str(sub, path, "priority")?;
    if Priority::parse(priority).is_none() {
        return Err(ValidationError::InvalidPriority {
            path: format!("{}.priority", path),
            value: priority.to_string(),
        });
    }

    for (k, tag) in required_array(sub, path, "tags")?.iter().enumerate() {
        if !tag.is_string() {
            return Err(ValidationError::WrongType {
                path: format!("{}.tags[{}]", path, k),
                expected: "a string",
            });
        }
    }

    for (k, case) in required_array(sub, path, "test_cases")?.iter().enumerate() {
        let case_path = format!("{}.test_cases[{}]", path, k);
        let case = as_object(case, &case_path)?;
        require_keys(case, &case_path, &TEST_CASE_KEYS)?;
        for key in TEST_CASE_KEYS {
            required_str(case, &case_path, key)?;
        }
    }

    Ok(())
}

/// Validate and convert into the typed document
pub fn validate_document(value: Value) -> Result<TestCaseDocument, ValidationError> {
    validate_structure(&value)?;
    serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError::WrongType {
        path: path.to_string(),
        expected: "an object",
    })
}

fn require_keys(
    object: &Map<String, Value>,
    path: &str,
    keys: &[&'static str],
) -> Result<(), ValidationError> {
    match keys.iter().find(|key| !object.contains_key(**key)) {
        Some(key) => Err(ValidationError::MissingKey {
            path: path.to_string(),
            key: *key,
        }),
        None => Ok(()),
    }
}

fn required_array<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    key: &'static str,
) -> Result<&'a Vec<Value>, ValidationError> {
    let value = object.get(key).ok_or_else(|| ValidationError::MissingKey {
        path: path.to_string(),
        key,
    })?;
    value.as_array().ok_or_else(|| ValidationError::WrongType {
        path: format!("{}.{}", path, key),
        expected: "an array",
    })
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    key: &'static str,
) -> Result<&'a str, ValidationError> {
    let value = object.get(key).ok_or_else(|| ValidationError::MissingKey {
        path: path.to_string(),
        key,
    })?;
    value.as_str().ok_or_else(|| ValidationError::WrongType {
        path: format!("{}.{}", path, key),
        expected: "a string",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conformant() -> Value {
        json!({
            "components": [
                {
                    "parent_component": "login-form",
                    "sub_components": [
                        {
                            "summary": "Valid credentials log the user in",
                            "priority": "P1",
                            "tags": ["Auth", "Smoke"],
                            "test_cases": [
                                {"action": "Enter valid email and password", "expected_result": "Dashboard opens"}
                            ]
                        }
                    ]
                },
                {
                    "parent_component": "footer",
                    "sub_components": []
                }
            ]
        })
    }

    #[test]
    fn test_conformant_document_passes() {
        assert!(validate_structure(&conformant()).is_ok());
        let doc = validate_document(conformant()).unwrap();
        assert_eq!(doc.components.len(), 2);
        assert_eq!(doc.components[0].sub_components[0].priority, Priority::P1);
    }

    #[test]
    fn test_empty_components_pass() {
        assert!(validate_structure(&json!({"components": []})).is_ok());
    }

    #[test]
    fn test_missing_components() {
        let err = validate_structure(&json!({"items": []})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingKey {
                path: "$".to_string(),
                key: "components"
            }
        );
    }

    #[test]
    fn test_missing_sub_components_on_any_component() {
        for index in 0..2 {
            let mut doc = conformant();
            doc["components"][index]
                .as_object_mut()
                .unwrap()
                .remove("sub_components");

            let err = validate_structure(&doc).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingKey {
                    path: format!("components[{}]", index),
                    key: "sub_components"
                }
            );
            assert!(err.to_string().contains("sub_components"));
        }
    }

    #[test]
    fn test_missing_parent_component() {
        let mut doc = conformant();
        doc["components"][1]
            .as_object_mut()
            .unwrap()
            .remove("parent_component");
        assert!(matches!(
            validate_structure(&doc),
            Err(ValidationError::MissingKey { key: "parent_component", .. })
        ));
    }

    #[test]
    fn test_missing_sub_component_keys() {
        for key in SUB_COMPONENT_KEYS {
            let mut doc = conformant();
            doc["components"][0]["sub_components"][0]
                .as_object_mut()
                .unwrap()
                .remove(key);

            let err = validate_structure(&doc).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingKey {
                    path: "components[0].sub_components[0]".to_string(),
                    key
                }
            );
        }
    }

    #[test]
    fn test_missing_test_case_keys() {
        let mut doc = conformant();
        doc["components"][0]["sub_components"][0]["test_cases"][0]
            .as_object_mut()
            .unwrap()
            .remove("expected_result");
        assert!(matches!(
            validate_structure(&doc),
            Err(ValidationError::MissingKey { key: "expected_result", .. })
        ));
    }

    #[test]
    fn test_invalid_priority() {
        let mut doc = conformant();
        doc["components"][0]["sub_components"][0]["priority"] = json!("High");
        let err = validate_structure(&doc).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPriority {
                path: "components[0].sub_components[0].priority".to_string(),
                value: "High".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_types() {
        assert_eq!(validate_structure(&json!([])).unwrap_err(), ValidationError::NotAnObject);

        let err = validate_structure(&json!({"components": {}})).unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { expected: "an array", .. }));

        let mut doc = conformant();
        doc["components"][0]["sub_components"][0]["tags"] = json!(["ok", 3]);
        let err = validate_structure(&doc).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                path: "components[0].sub_components[0].tags[1]".to_string(),
                expected: "a string"
            }
        );
    }
}
