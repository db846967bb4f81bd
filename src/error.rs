//! Crate-wide error types.
//!
//! Every fallible call on [`GlyphServicePort`](crate::app::ports::GlyphServicePort)
//! funnels into [`GlyphError`].  All variants are `Copy` so they can be
//! carried inside outbound events without allocation.  [`Error`] unifies
//! the per-port errors for bootstrap code.

use core::fmt;

use crate::app::ports::ConfigError;

/// Top-level error for the controller crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Glyph(GlyphError),
    Config(ConfigError),
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glyph(e) => write!(f, "glyph: {}", e),
            Self::Config(e) => write!(f, "config: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Glyph(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<GlyphError> for Error {
    fn from(e: GlyphError) -> Self {
        Self::Glyph(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Hardware-service errors
// ---------------------------------------------------------------------------

/// A failure reported by the glyph hardware service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphError {
    /// The service binding is not established.
    NotBound,
    /// The service refused to open a session.
    SessionOpenFailed,
    /// Closing the session failed (usually already invalidated).
    SessionCloseFailed,
    /// Turning the hardware output off failed.
    TurnOffFailed,
    /// The frame builder could not produce a frame.
    FrameBuildFailed,
    /// A display command was rejected.
    DisplayFailed,
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBound => write!(f, "service not bound"),
            Self::SessionOpenFailed => write!(f, "session open failed"),
            Self::SessionCloseFailed => write!(f, "session close failed"),
            Self::TurnOffFailed => write!(f, "turn off failed"),
            Self::FrameBuildFailed => write!(f, "frame build failed"),
            Self::DisplayFailed => write!(f, "display failed"),
        }
    }
}

impl std::error::Error for GlyphError {}
