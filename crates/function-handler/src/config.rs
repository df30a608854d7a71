//! Configuration loading for the default handlers.
//!
//! Configuration is layered with figment. Later sources override earlier:
//! 1. Default values (compiled in)
//! 2. Config file: `function-handler.toml` in the working directory (optional)
//! 3. Environment variables with the `FUNCTION_HANDLER_` prefix
//!
//! | Variable | Field |
//! |----------|-------|
//! | `FUNCTION_HANDLER_CONTENT_TYPE` | `content_type` |
//! | `FUNCTION_HANDLER_DOMAIN_ERROR_PREFIX` | `domain_error_prefix` |
//! | `FUNCTION_HANDLER_FAILURE_PREFIX` | `failure_prefix` |
//! | `FUNCTION_HANDLER_DOMAIN_ERROR_STATUS` | `domain_error_status` |

use crate::error::ConfigError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "function-handler.toml";
const ENV_PREFIX: &str = "FUNCTION_HANDLER_";

/// Content type of the default handlers' JSON responses.
pub const APPLICATION_JSON: &str = "application/json";

/// Settings used by the default success, domain error and failure handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Value of the `Content-Type` header on default responses.
    pub content_type: String,
    /// Prefix of the message describing a domain error.
    pub domain_error_prefix: String,
    /// Prefix of the message describing a system failure.
    pub failure_prefix: String,
    /// Status code answered for a domain error.
    pub domain_error_status: u16,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            content_type: APPLICATION_JSON.to_string(),
            domain_error_prefix: "An error has occurred. The error is:".to_string(),
            failure_prefix: "A system failure occurred. The failure is:".to_string(),
            domain_error_status: 500,
        }
    }
}

impl HandlerConfig {
    /// Loads configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Loads configuration using a custom config file path.
    ///
    /// A missing file is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(HandlerConfig::default()));

        if config_path.as_ref().exists() {
            figment = figment.merge(Toml::file(config_path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config: HandlerConfig = figment.extract()?;
        tracing::debug!(?config, "handler configuration loaded");
        Ok(config)
    }

    /// Creates a new config builder, starting from the defaults.
    pub fn builder() -> HandlerConfigBuilder {
        HandlerConfigBuilder::default()
    }

    /// Formats the message describing a domain error.
    pub fn domain_error_message(&self, error: impl std::fmt::Display) -> String {
        format!("{} {}", self.domain_error_prefix, error)
    }

    /// Formats the message describing a system failure.
    pub fn failure_message(&self, failure: impl std::fmt::Display) -> String {
        format!("{} {}", self.failure_prefix, failure)
    }
}

/// Builder for [`HandlerConfig`].
#[derive(Debug, Default)]
#[must_use = "builders do nothing unless .build() is called"]
pub struct HandlerConfigBuilder {
    config: HandlerConfig,
}

impl HandlerConfigBuilder {
    /// Sets the response content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.config.content_type = content_type.into();
        self
    }

    /// Sets the domain error message prefix.
    pub fn domain_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.domain_error_prefix = prefix.into();
        self
    }

    /// Sets the system failure message prefix.
    pub fn failure_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.failure_prefix = prefix.into();
        self
    }

    /// Sets the status code answered for a domain error.
    pub fn domain_error_status(mut self, status: u16) -> Self {
        self.config.domain_error_status = status;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> HandlerConfig {
        self.config
    }
}
