//! Test Case Generator
//!
//! One completion per call: prompt, repair, validate. Nothing is retried.

use chrono::Local;
use dq_llm::{ChatMessage, ChatRequest, LlmProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::document::TestCaseDocument;
use crate::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::repair::{repair, RepairStage};
use crate::summary::detailed_summary;
use crate::validate::{validate_document, ValidationError};

/// Format of [`GenerationResult::timestamp`]
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Both UI and SRS descriptions are required")]
    MissingDescriptions,

    #[error("Completion request failed: {0:#}")]
    Upstream(anyhow::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl GenerateError {
    /// True when the caller supplied bad input rather than the system failing
    pub fn is_client_error(&self) -> bool {
        matches!(self, GenerateError::MissingDescriptions)
    }
}

/// Completion parameters, fixed per call
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Overrides the provider's default model
    pub model: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.2,
            max_tokens: 4000,
        }
    }
}

/// Response body of a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub timestamp: String,
    pub test_cases: TestCaseDocument,
    pub summary: String,
}

/// Generates test cases through an LLM provider
#[derive(Clone)]
pub struct TestCaseGenerator {
    provider: Arc<dyn LlmProvider>,
    config: GenerationConfig,
}

impl TestCaseGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            config: GenerationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Model that requests will be sent to
    pub fn model(&self) -> &str {
        self.config
            .model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    pub fn provider_name(&self) -> String {
        self.provider.provider_type().to_string()
    }

    /// Generate and validate a document
    pub async fn generate(
        &self,
        ui_description: &str,
        srs_description: &str,
    ) -> Result<TestCaseDocument, GenerateError> {
        if ui_description.trim().is_empty() || srs_description.trim().is_empty() {
            return Err(GenerateError::MissingDescriptions);
        }

        let request = ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(ui_description, srs_description)),
        ])
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens);

        info!("Generating test cases with {} ({})", self.provider_name(), self.model());

        let response = self
            .provider
            .chat_with_request(self.model(), request)
            .await
            .map_err(|e| {
                error!("Error in completion call: {:#}", e);
                GenerateError::Upstream(e)
            })?;

        let repaired = repair(&response.message.content);
        match repaired.stage {
            RepairStage::Strict => info!("Completion parsed as JSON"),
            RepairStage::Extracted => info!("Completion repaired by brace extraction"),
            RepairStage::Fallback => warn!("Completion unusable, substituted fallback document"),
        }

        validate_document(repaired.value).map_err(|e| {
            error!("Error structuring response: {}", e);
            GenerateError::Validation(e)
        })
    }

    /// Generate a document plus its timestamp and summary
    pub async fn generate_report(
        &self,
        ui_description: &str,
        srs_description: &str,
    ) -> Result<GenerationResult, GenerateError> {
        let test_cases = self.generate(ui_description, srs_description).await?;
        let summary = detailed_summary(&test_cases);

        Ok(GenerationResult {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            test_cases,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 4000);
        assert!(config.model.is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenerateError::MissingDescriptions.to_string(),
            "Both UI and SRS descriptions are required"
        );
        assert!(GenerateError::MissingDescriptions.is_client_error());

        let err = GenerateError::Upstream(anyhow::anyhow!("groq API error 401"));
        assert!(err.to_string().contains("401"));
        assert!(!err.is_client_error());
    }
}
