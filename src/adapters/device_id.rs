//! Device identity for the host simulator.
//!
//! On a phone the model code comes from the OS build properties.  On the
//! host it comes from the `GLYPHGLOW_DEVICE_MODEL` environment variable,
//! falling back to the configured `device_model`.

use crate::app::ports::DeviceIdentityPort;
use crate::profile::DeviceIdentity;

/// Environment variable that overrides the configured model code.
pub const DEVICE_MODEL_ENV: &str = "GLYPHGLOW_DEVICE_MODEL";

/// Reports a fixed model code.
#[derive(Debug, Clone)]
pub struct StaticDeviceIdentity {
    identity: DeviceIdentity,
}

impl StaticDeviceIdentity {
    pub fn new(model: &str) -> Self {
        Self {
            identity: DeviceIdentity::from_model(model),
        }
    }

    /// Prefer the environment override, else `configured`.
    pub fn from_env_or(configured: &str) -> Self {
        match std::env::var(DEVICE_MODEL_ENV) {
            Ok(model) if !model.trim().is_empty() => Self::new(&model),
            _ => Self::new(configured),
        }
    }
}

impl DeviceIdentityPort for StaticDeviceIdentity {
    fn current_device(&self) -> DeviceIdentity {
        self.identity.clone()
    }
}
