//! dq-web-server: Main Entry Point

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dq_core::Settings;
use dq_web::{create_router, serve, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load credentials from the env file (if any) before reading settings
    let env_file = dq_core::config::load_environment();

    tracing_subscriber::registry()
        .with(fmt::layer().compact())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dq_web=debug")),
        )
        .init();

    if let Some(path) = env_file {
        info!("Environment loaded from {}", path);
    }

    let settings = Settings::from_env()?;
    let state = Arc::new(AppState::new(&settings));

    info!(
        "LLM Provider: {} ({})",
        state.generator.provider_name(),
        state.generator.model()
    );

    let config = ServerConfig::from_settings(&settings);
    println!(
        r#"
┌─────────────────────────────────────────────────────────────────┐
│                  Test Case Generator Ready                      │
├─────────────────────────────────────────────────────────────────┤
│  🌐 Generator:     http://localhost:{port:<5}                      │
│  🎨 Figma API:     http://localhost:{port:<5}/api/figma/endpoints  │
│  📊 Health:        http://localhost:{port:<5}/api/health           │
│                                                                 │
│  Press Ctrl+C to stop                                           │
└─────────────────────────────────────────────────────────────────┘
"#,
        port = config.port
    );

    serve(create_router(state), &config).await?;
    Ok(())
}
