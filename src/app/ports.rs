//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (glyph service binding, device identity, event sinks,
//! config storage) implement these traits.  The
//! [`AppService`](super::service::AppService) consumes them via generics,
//! so the domain core never touches the vendor service directly.

use crate::config::SystemConfig;
use crate::error::GlyphError;
use crate::profile::{DeviceIdentity, HardwareProfile};
use crate::zones::Zone;

// ───────────────────────────────────────────────────────────────
// Glyph service port (driven adapter: domain ↔ hardware service)
// ───────────────────────────────────────────────────────────────

/// Accumulates zone sub-patterns into a single frame.
pub trait FrameBuilder {
    type Frame;

    /// Add the sub-pattern for `zone`.  Order of calls is draw order only.
    fn include(&mut self, zone: Zone);

    /// Finish the frame.
    fn build(self) -> Result<Self::Frame, GlyphError>;
}

/// The vendor hardware service, as seen by the session manager.
///
/// Connection notifications do not come back through this trait: the
/// adapter turns them into [`ServiceEvent`](crate::session::ServiceEvent)s
/// that the owner of the service feeds to the controller.
pub trait GlyphServicePort {
    type Frame;
    type Builder: FrameBuilder<Frame = Self::Frame>;

    /// Ask the OS integration layer to bind the service.  Completion is
    /// reported later as `ServiceEvent::Connected`.
    fn bind(&mut self);

    /// Release the service binding.
    fn unbind(&mut self);

    /// Register the device profile.  `false` means the service refused it.
    fn register(&mut self, profile: HardwareProfile) -> bool;

    fn open_session(&mut self) -> Result<(), GlyphError>;

    fn close_session(&mut self) -> Result<(), GlyphError>;

    /// Blank every LED.
    fn turn_off(&mut self) -> Result<(), GlyphError>;

    fn frame_builder(&mut self) -> Result<Self::Builder, GlyphError>;

    /// Show `frame` as a plain on/off pattern.
    fn display_static(&mut self, frame: Self::Frame) -> Result<(), GlyphError>;

    /// Show `frame` as a progress bar at `percent` (0–100).
    fn display_progress(
        &mut self,
        frame: Self::Frame,
        percent: u8,
        looping: bool,
    ) -> Result<(), GlyphError>;
}

// ───────────────────────────────────────────────────────────────
// Device identity port (driven adapter: OS → domain)
// ───────────────────────────────────────────────────────────────

/// Reports which device we are running on.
pub trait DeviceIdentityPort {
    fn current_device(&self) -> DeviceIdentity;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → UI / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (status line,
/// transient toast, log).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads system configuration.
///
/// Implementations MUST validate before returning.  Invalid values are
/// rejected with [`ConfigError::ValidationFailed`], not silently clamped.
pub trait ConfigPort {
    /// Returns [`SystemConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;
}

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config could not be deserialized.
    Corrupted,
    /// A config field failed validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
