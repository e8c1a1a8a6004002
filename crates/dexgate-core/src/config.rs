//! Upstream connection settings.

use thiserror::Error;

use crate::http_client::DEFAULT_TIMEOUT_MS;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_RESOURCE: &str = "pokemon";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("upstream base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("upstream resource name cannot be empty")]
    EmptyResource,
    #[error("upstream timeout must be greater than zero")]
    ZeroTimeout,
    #[error("upstream resource '{resource}' cannot form an id pattern: {message}")]
    InvalidResource { resource: String, message: String },
}

/// Where the creature catalogue lives and how long a call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Collection segment, used both in request paths and id extraction.
    pub resource: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            resource: String::from(DEFAULT_RESOURCE),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(concat!("dexgate/", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl UpstreamConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }
        if self.resource.trim().is_empty() {
            return Err(ConfigError::EmptyResource);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
