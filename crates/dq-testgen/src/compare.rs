//! Design vs. website comparison
//!
//! Asks a model to write test cases for the differences between an element
//! as designed in Figma and the same element as rendered on the site. The
//! rendered properties are collected elsewhere and passed in.

use anyhow::{Context, Result};
use dq_llm::{ChatMessage, LlmProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Visible properties of one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementProperties {
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// Element kind, e.g. "Button"
    pub element: String,
    pub design: ElementProperties,
    pub website: ElementProperties,
}

impl ComparisonRequest {
    /// Names of the properties that differ. Colors compare case-insensitively.
    pub fn differing_properties(&self) -> Vec<&'static str> {
        let mut differing = Vec::new();
        if self.design.text != self.website.text {
            differing.push("text");
        }
        if !self.design.color.eq_ignore_ascii_case(&self.website.color) {
            differing.push("color");
        }
        differing
    }

    pub fn prompt(&self) -> String {
        format!(
            "Compare the following Figma design and actual website properties:

Figma {element}:
- Text: \"{design_text}\"
- Color: \"{design_color}\"

Website {element}:
- Text: \"{website_text}\"
- Color: \"{website_color}\"

Generate test cases to validate the differences.",
            element = self.element,
            design_text = self.design.text,
            design_color = self.design.color,
            website_text = self.website.text,
            website_color = self.website.color,
        )
    }
}

pub struct DesignComparator {
    provider: Arc<dyn LlmProvider>,
    model: Option<String>,
}

impl DesignComparator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Send the comparison prompt and return the model's text unchanged
    pub async fn compare(&self, request: &ComparisonRequest) -> Result<String> {
        let model = self
            .model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model());

        info!(
            "Comparing {} design vs website (differing: {:?})",
            request.element,
            request.differing_properties()
        );

        let response = self
            .provider
            .chat(model, vec![ChatMessage::system(request.prompt())])
            .await
            .context("Design comparison request failed")?;

        Ok(response.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> ComparisonRequest {
        ComparisonRequest {
            element: "Button".to_string(),
            design: ElementProperties {
                text: "Sign Up".to_string(),
                color: "#FF5733".to_string(),
            },
            website: ElementProperties {
                text: "Register".to_string(),
                color: "#ff5733".to_string(),
            },
        }
    }

    #[test]
    fn test_prompt_lists_both_sides() {
        let prompt = button().prompt();
        assert!(prompt.contains("Figma Button:\n- Text: \"Sign Up\"\n- Color: \"#FF5733\""));
        assert!(prompt.contains("Website Button:\n- Text: \"Register\""));
        assert!(prompt.ends_with("Generate test cases to validate the differences."));
    }

    #[test]
    fn test_prompt_same_when_nothing_differs() {
        let mut request = button();
        request.website = request.design.clone();
        assert!(request.differing_properties().is_empty());
        assert!(request
            .prompt()
            .starts_with("Compare the following Figma design and actual website properties:"));
        assert!(request.prompt().contains("Website Button:\n- Text: \"Sign Up\""));
    }

    #[test]
    fn test_differing_properties() {
        let mut request = button();
        assert_eq!(request.differing_properties(), vec!["text"]);

        request.website.color = "#FF0000".to_string();
        assert_eq!(request.differing_properties(), vec!["text", "color"]);

        request.website = request.design.clone();
        assert!(request.differing_properties().is_empty());
    }
}
