//! Environment File Loader
//!
//! Credentials (`FIGMA_ACCESS_TOKEN`, `GROQ_API_KEY`, `XAI_API_KEY`) and
//! server settings are read from the process environment. For convenience
//! they can also live in an env file; the first existing file wins:
//!
//! 1. `$DQ_ENV_FILE`
//! 2. `/etc/design-qa/environment`
//! 3. `.env` in the current directory
//!
//! Variables already present in the environment are never overridden.
//!
//! ```no_run
//! dq_core::config::load_environment();
//! let settings = dq_core::Settings::from_env();
//! ```

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable naming a custom env file
pub const ENV_FILE_VAR: &str = "DQ_ENV_FILE";

/// Paths checked in order of priority
pub const ENV_FILE_PATHS: &[&str] = &["/etc/design-qa/environment", ".env"];

/// Load environment variables from the first env file found.
///
/// Returns the path that was loaded, or None if no file was found.
pub fn load_environment() -> Option<String> {
    if let Ok(custom_path) = std::env::var(ENV_FILE_VAR) {
        if let Some(path) = try_load_env_file(&custom_path) {
            return Some(path);
        }
        warn!("{} points to {} but it could not be loaded", ENV_FILE_VAR, custom_path);
    }

    for path in ENV_FILE_PATHS {
        if let Some(loaded_path) = try_load_env_file(path) {
            return Some(loaded_path);
        }
    }

    debug!("No environment file found, using existing environment");
    None
}

/// Try to load an environment file from the given path.
pub fn try_load_env_file(path: &str) -> Option<String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return None;
    }

    match fs::read_to_string(path_obj) {
        Ok(content) => {
            let mut loaded_count = 0;
            let mut skipped_count = 0;

            for line in content.lines() {
                let line = line.trim();

                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = parse_env_line(line) {
                    if std::env::var(&key).is_err() {
                        debug!("Loaded: {}={}", key, mask_secret(&key, &value));
                        std::env::set_var(&key, &value);
                        loaded_count += 1;
                    } else {
                        skipped_count += 1;
                        debug!("Skipped (already set): {}", key);
                    }
                }
            }

            info!(
                "Loaded {} environment variables from {} ({} skipped - already set)",
                loaded_count, path, skipped_count
            );

            Some(path.to_string())
        }
        Err(e) => {
            warn!("Failed to read environment file {}: {}", path, e);
            None
        }
    }
}

/// Parse a single `KEY=VALUE` line. Surrounding quotes are removed and an
/// optional leading `export ` is accepted.
fn parse_env_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() {
        return None;
    }

    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);

    Some((key.to_string(), value.to_string()))
}

fn mask_secret<'a>(key: &str, value: &'a str) -> &'a str {
    if key.contains("KEY") || key.contains("TOKEN") || key.contains("SECRET") {
        "***"
    } else {
        value
    }
}

/// Get an optional configuration value. Empty values count as unset.
pub fn get_config_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
