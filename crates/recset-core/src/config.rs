//! Configuration types for record-set reconciliation
//!
//! This module defines the configuration structures embedding applications
//! use to wire up a provider client and accessor.

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecsetConfig {
    /// Provider client configuration
    pub provider: ProviderConfig,

    /// Accessor settings
    #[serde(default)]
    pub accessor: AccessorConfig,
}

impl RecsetConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.provider.validate()?;
        self.accessor.validate()?;
        Ok(())
    }
}

/// Zone API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the zone API (e.g., "https://dns.example.net/api/v1")
    pub endpoint: String,

    /// Bearer token for the zone API
    pub api_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.endpoint.is_empty() {
            return Err(crate::Error::config("provider endpoint cannot be empty"));
        }
        if self.api_token.is_empty() {
            return Err(crate::Error::config("provider API token cannot be empty"));
        }
        Ok(())
    }
}

/// Accessor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessorConfig {
    /// Attempt budget for mutating calls
    ///
    /// Each call gets this many tries while the provider keeps throttling;
    /// non-throttling failures never consume more than one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl AccessorConfig {
    /// Validate the accessor settings
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.max_attempts == 0 {
            return Err(crate::Error::config("accessor attempt budget must be > 0"));
        }
        Ok(())
    }
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_max_attempts() -> u32 {
    crate::retry::DEFAULT_ATTEMPTS
}

fn default_timeout_secs() -> u64 {
    30
}
