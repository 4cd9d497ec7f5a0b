//! dq-core: shared configuration and error types for design-qa
//!
//! Every binary calls [`config::load_environment`] first, then builds a
//! [`Settings`] snapshot that the other crates read their credentials and
//! endpoints from.

pub mod config;
pub mod error;
pub mod settings;

pub use error::{Error, Result};
pub use settings::Settings;
