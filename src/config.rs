//! System configuration parameters
//!
//! Settings for the host simulator: which device the simulated OS layer
//! reports, which service calls it should fail, and the default log
//! filter.  Zone state is never part of the configuration.

use serde::{Deserialize, Serialize};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::error::Result;
use crate::profile::DEVICE_MODEL_CAP;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Device ---
    /// Vendor model code reported by the device identity query
    pub device_model: String,

    // --- Simulated service faults ---
    /// Refuse every profile registration
    pub reject_registration: bool,
    /// Fail every session open
    pub fail_session_open: bool,

    // --- Logging ---
    /// `env_logger` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            device_model: "A142".into(), // Phone (2a)
            reject_registration: false,
            fail_session_open: false,
            log_filter: "info".into(),
        }
    }
}

impl SystemConfig {
    /// Load from `store` at startup.  Validated regardless of what the
    /// store itself checks.
    pub fn load(store: &impl ConfigPort) -> Result<Self> {
        let config = store.load()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the system cannot represent.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        let model = self.device_model.trim();
        if model.is_empty() {
            return Err(ConfigError::ValidationFailed("device_model must not be empty"));
        }
        if model.len() > DEVICE_MODEL_CAP {
            return Err(ConfigError::ValidationFailed("device_model longer than 32 bytes"));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("log_filter must not be empty"));
        }
        Ok(())
    }
}
