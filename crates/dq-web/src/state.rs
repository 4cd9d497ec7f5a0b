//! Application State
//!
//! Built once at startup and shared read-only by every handler.

use dq_core::Settings;
use dq_figma::FigmaClient;
use dq_llm::OpenAiCompatibleClient;
use dq_testgen::{DesignComparator, TestCaseGenerator};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Application state shared across all handlers
pub struct AppState {
    /// Groq-backed test case generator
    pub generator: TestCaseGenerator,
    /// xAI-backed design comparison
    pub comparator: DesignComparator,
    pub figma: FigmaClient,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let groq = Arc::new(OpenAiCompatibleClient::groq_from_settings(settings));
        let xai = Arc::new(OpenAiCompatibleClient::xai_from_settings(settings));
        let figma = FigmaClient::from_settings(settings);

        info!("Figma API: {}", figma.api_url());
        info!("Generator: groq at {}", groq.api_url());
        info!("Comparator: xai at {}", xai.api_url());

        Self::from_parts(
            TestCaseGenerator::new(groq),
            DesignComparator::new(xai),
            figma,
        )
    }

    pub fn from_parts(
        generator: TestCaseGenerator,
        comparator: DesignComparator,
        figma: FigmaClient,
    ) -> Self {
        Self {
            generator,
            comparator,
            figma,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
