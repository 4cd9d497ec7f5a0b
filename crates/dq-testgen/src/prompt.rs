//! Prompts for test case generation

pub const SYSTEM_PROMPT: &str =
    "You are a test automation expert. Always respond with valid JSON following the specified structure.";

const RESPONSE_SHAPE: &str = r#"{
  "components": [
    {
      "parent_component": "component-name",
      "sub_components": [
        {
          "summary": "test-objective",
          "priority": "P1",
          "tags": ["tag1", "tag2"],
          "test_cases": [
            {
              "action": "test-step",
              "expected_result": "expected-outcome"
            }
          ]
        }
      ]
    }
  ]
}"#;

/// User prompt combining both descriptions with the required JSON shape
pub fn build_prompt(ui_description: &str, srs_description: &str) -> String {
    format!(
        "Generate test cases in valid JSON format for the following UI and SRS descriptions.
The response must be a valid JSON object and nothing else.

UI Description:
{ui}

SRS Description:
{srs}

The response must strictly follow this JSON structure:
{shape}

Generate comprehensive test cases for each component mentioned in the UI description, following the requirements in the SRS.",
        ui = ui_description,
        srs = srs_description,
        shape = RESPONSE_SHAPE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_structure;

    #[test]
    fn test_prompt_contains_inputs() {
        let prompt = build_prompt("A login page with email field", "Users must log in");
        assert!(prompt.contains("UI Description:\nA login page with email field"));
        assert!(prompt.contains("SRS Description:\nUsers must log in"));
        assert!(prompt.contains("\"parent_component\""));
    }

    #[test]
    fn test_example_shape_is_itself_valid() {
        let shape: serde_json::Value = serde_json::from_str(RESPONSE_SHAPE).unwrap();
        assert!(validate_structure(&shape).is_ok());
    }
}
