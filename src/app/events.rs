//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: update a status line, show a
//! transient warning or write to the log.

use core::fmt;

use crate::compose::Composition;
use crate::error::GlyphError;
use crate::session::SessionState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// New text for the persistent status line.
    Status(StatusText),

    /// A recoverable problem the user should briefly see.
    Warning(Warning),

    /// The session state machine moved.
    SessionChanged { from: SessionState, to: SessionState },

    /// A composition pass reached the hardware.
    Composed(Composition),
}

/// Status line contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusText {
    BindingService,
    ServiceConnected,
    RegisterFailed,
    SessionOpen,
    ServiceDisconnected,
}

impl fmt::Display for StatusText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BindingService => write!(f, "Status: binding service..."),
            Self::ServiceConnected => write!(f, "Status: service connected"),
            Self::RegisterFailed => write!(f, "Status: register failed"),
            Self::SessionOpen => write!(f, "Status: session open"),
            Self::ServiceDisconnected => write!(f, "Status: service disconnected"),
        }
    }
}

/// Transient, user-facing warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The service refused the device profile.  Session opening still
    /// goes ahead.
    RegisterFailed,
    /// The session could not be opened.  No retry until the next connect.
    SessionError(GlyphError),
    /// A composition pass failed; hardware may show a stale frame.
    DispatchFailed(GlyphError),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegisterFailed => write!(f, "Glyph register failed"),
            Self::SessionError(_) => write!(f, "Glyph session error"),
            Self::DispatchFailed(e) => write!(f, "Glyph display error: {e}"),
        }
    }
}
