//! OpenAI-Compatible Chat Client
//!
//! ## API Endpoints
//!
//! | Provider | Base URL | Chat |
//! |----------|----------|------|
//! | Groq | `https://api.groq.com/openai/v1` | `/chat/completions` |
//! | xAI | `https://api.x.ai/v1` | `/chat/completions` |
//!
//! ## Authentication
//! - Header: `Authorization: Bearer {API_KEY}`
//! - Environment: `GROQ_API_KEY`, `XAI_API_KEY`

use anyhow::{Context, Result};
use async_trait::async_trait;
use dq_core::Settings;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::provider::{
    ChatMessage, ChatRequest, ChatResponse, LlmProvider, ProviderType, TokenUsage,
};

// =============================================================================
// API ENDPOINT CONFIGURATION
// =============================================================================

/// Provider endpoints and defaults
pub mod endpoints {
    /// Groq base URL (OpenAI-compatible surface)
    pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

    /// xAI base URL
    pub const XAI_BASE_URL: &str = "https://api.x.ai/v1";

    /// Chat completions endpoint
    /// Full URL: {BASE_URL}/chat/completions
    pub const CHAT_COMPLETIONS: &str = "/chat/completions";

    pub const GROQ_DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

    pub const XAI_DEFAULT_MODEL: &str = "grok-beta";
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
    model: Option<String>,
    usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

// =============================================================================
// CLIENT IMPLEMENTATION
// =============================================================================

/// Client for any OpenAI-compatible chat-completions API
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    provider: ProviderType,
    api_key: String,
    /// Base API URL
    api_url: String,
    default_model: String,
}

impl OpenAiCompatibleClient {
    pub fn new(
        provider: ProviderType,
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            provider,
            api_key: api_key.into(),
            api_url: api_url.into(),
            default_model: default_model.into(),
        }
    }

    /// Groq with default endpoint and model
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self::new(
            ProviderType::Groq,
            api_key,
            endpoints::GROQ_BASE_URL,
            endpoints::GROQ_DEFAULT_MODEL,
        )
    }

    /// xAI with default endpoint and model
    pub fn xai(api_key: impl Into<String>) -> Self {
        Self::new(
            ProviderType::Xai,
            api_key,
            endpoints::XAI_BASE_URL,
            endpoints::XAI_DEFAULT_MODEL,
        )
    }

    /// Groq client from settings. The key is not validated here.
    pub fn groq_from_settings(settings: &Settings) -> Self {
        let key = settings.groq_api_key.clone().unwrap_or_else(|| {
            warn!("GROQ_API_KEY not set; Groq will reject completion requests");
            String::new()
        });
        let mut client = Self::groq(key);
        if let Some(base) = &settings.groq_api_base {
            client.api_url = base.clone();
        }
        if let Some(model) = &settings.groq_model {
            client.default_model = model.clone();
        }
        client
    }

    /// xAI client from settings. The key is not validated here.
    pub fn xai_from_settings(settings: &Settings) -> Self {
        let key = settings.xai_api_key.clone().unwrap_or_else(|| {
            warn!("XAI_API_KEY not set; xAI will reject completion requests");
            String::new()
        });
        let mut client = Self::xai(key);
        if let Some(base) = &settings.xai_api_base {
            client.api_url = base.clone();
        }
        if let Some(model) = &settings.xai_model {
            client.default_model = model.clone();
        }
        client
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_url = endpoint.into();
        self
    }

    /// Get the current API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn completions_url(&self) -> String {
        format!(
            "{}{}",
            self.api_url.trim_end_matches('/'),
            endpoints::CHAT_COMPLETIONS
        )
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleClient {
    fn provider_type(&self) -> ProviderType {
        self.provider
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn chat_with_request(&self, model: &str, request: ChatRequest) -> Result<ChatResponse> {
        let url = self.completions_url();

        info!("{} chat: model={}, endpoint={}", self.provider, model, self.api_url);
        debug!("{} request to: {}", self.provider, url);

        let body = CompletionRequest {
            model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to send {} request", self.provider))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("{} API error {}: {}", self.provider, status, body));
        }

        let result: CompletionResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", self.provider))?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("No response from {}", self.provider))?;

        let usage = result.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        info!("{} response received (finish_reason={:?})", self.provider, choice.finish_reason);

        Ok(ChatResponse {
            message: ChatMessage::assistant(choice.message.content.unwrap_or_default()),
            model: result.model.unwrap_or_else(|| model.to_string()),
            provider: self.provider.to_string(),
            finish_reason: choice.finish_reason,
            usage,
        })
    }
}
