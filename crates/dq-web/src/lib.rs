//! dq-web: Test Case Generator & Figma Explorer
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      dq-web Server (:5000)                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  /                            - Generator page                   │
//! │  /generate                    - Generate test cases (POST)       │
//! │  /download/json/:timestamp    - Test cases as JSON file          │
//! │  /download/summary/:timestamp - Summary as text file             │
//! │  /api/figma/endpoints         - Figma endpoint registry          │
//! │  /api/figma/:endpoint         - Figma fetch (result pair)        │
//! │  /api/compare                 - Design vs website (POST)         │
//! │  /api/health                  - Health check                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_router;
pub use server::{serve, ServerConfig, ServerError};
pub use state::AppState;
