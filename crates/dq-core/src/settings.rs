//! Runtime settings gathered from the environment

use crate::{Error, Result};

/// Default bind host for the web server
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default web server port
pub const DEFAULT_PORT: u16 = 5000;

/// Snapshot of every environment-provided setting.
///
/// Credentials are not validated here; a missing key only surfaces when the
/// upstream API rejects the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub figma_access_token: Option<String>,
    /// Overrides `https://api.figma.com/v1`
    pub figma_api_base: Option<String>,
    pub groq_api_key: Option<String>,
    pub groq_api_base: Option<String>,
    pub groq_model: Option<String>,
    pub xai_api_key: Option<String>,
    pub xai_api_base: Option<String>,
    pub xai_model: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(crate::config::get_config_opt)
    }

    /// Read settings through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::config(format!("PORT must be a port number, got '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            figma_access_token: lookup("FIGMA_ACCESS_TOKEN"),
            figma_api_base: lookup("FIGMA_API_BASE"),
            groq_api_key: lookup("GROQ_API_KEY"),
            groq_api_base: lookup("GROQ_API_BASE"),
            groq_model: lookup("GROQ_MODEL"),
            xai_api_key: lookup("XAI_API_KEY"),
            xai_api_base: lookup("XAI_API_BASE"),
            xai_model: lookup("XAI_MODEL"),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// `host:port` string for binding the web server
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
