//! Inbound commands to the application service.
//!
//! These are the UI collaborator's input events that the
//! [`AppService`](super::service::AppService) interprets and acts upon.

/// Commands that the UI can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Switch zone A on or off.
    ToggleA(bool),

    /// Switch zone B on or off.
    ToggleB(bool),

    /// Set the zone C level.  Out-of-range values are clamped to 0–100.
    ///
    /// `from_user` is false when the widget moved programmatically; such
    /// writes update the stored level but never reach the hardware.
    SetC { percent: i32, from_user: bool },
}
