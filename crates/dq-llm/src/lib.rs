//! dq-llm: Chat-Completion Providers
//!
//! ## Supported Providers & Endpoints
//!
//! | Provider | Base URL | Auth Method |
//! |----------|----------|-------------|
//! | Groq | `https://api.groq.com/openai/v1` | `Bearer {GROQ_API_KEY}` |
//! | xAI | `https://api.x.ai/v1` | `Bearer {XAI_API_KEY}` |
//!
//! Both speak the OpenAI `/chat/completions` dialect, so a single client
//! type serves them.
//!
//! ## Environment Variables
//!
//! ```bash
//! GROQ_API_KEY=gsk_xxx     # Groq (test case generation)
//! XAI_API_KEY=xai-xxx      # xAI (design comparison)
//! ```

pub mod openai_compat;
pub mod provider;

pub use openai_compat::OpenAiCompatibleClient;
pub use provider::{
    ChatMessage, ChatRequest, ChatResponse, LlmProvider, ProviderType, TokenUsage,
};
