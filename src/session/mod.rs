//! Session lifecycle manager.
//!
//! Owns the glyph service handle and drives it through its connection
//! states.  Connection notifications arrive as [`ServiceEvent`] messages;
//! everything else is an explicit call from the single owning actor.
//!
//! ```text
//!             start()                     Connected
//!  Unbound ──(bind)──▶ Unbound ─────────────────────▶ Bound
//!                                                      │
//!                                   register ok ┌──────┴──────┐ register refused
//!                                               ▼             │ (warning)
//!                                          Registered         │
//!                                               │ open ok     │ open ok
//!                                               ▼             ▼
//!                                             ┌─── SessionOpen ───┐
//!                                             │  (clear, compose) │
//!                                             └─────────┬─────────┘
//!                                                       │ Disconnected
//!                                                       ▼
//!                                                 Disconnected ──Connected──▶ Bound
//!
//!  Any state ──shutdown()──▶ Unbound   (close + unbind, errors swallowed)
//! ```
//!
//! Only `SessionOpen` is ready.  Dispatch requests in any other state are
//! dropped, not queued.

use log::{debug, error, info, warn};

use crate::app::events::{AppEvent, StatusText, Warning};
use crate::app::ports::{DeviceIdentityPort, EventSink, GlyphServicePort};
use crate::compose::{self, Composition};
use crate::error::GlyphError;
use crate::profile::{self, HardwareProfile};
use crate::zones::ZoneState;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Connection state of the glyph service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Unbound,
    Bound,
    Registered,
    SessionOpen,
    Disconnected,
}

impl SessionState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unbound => "Unbound",
            Self::Bound => "Bound",
            Self::Registered => "Registered",
            Self::SessionOpen => "SessionOpen",
            Self::Disconnected => "Disconnected",
        }
    }

    /// Whether the service side may be holding a session for us.
    const fn may_hold_session(self) -> bool {
        matches!(self, Self::Bound | Self::Registered | Self::SessionOpen)
    }
}

/// Asynchronous notifications from the glyph service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceEvent {
    Connected,
    Disconnected,
}

// ---------------------------------------------------------------------------
// Manager
// ---------------------------------------------------------------------------

/// Owns the service binding and the connection state machine.
pub struct SessionManager<S, D> {
    service: S,
    identity: D,
    state: SessionState,
    /// Profile chosen for the current connection.
    profile: Option<HardwareProfile>,
    /// Set by `start()`, cleared by `shutdown()`.  Connect callbacks that
    /// arrive while unset are ignored.
    binding_requested: bool,
}

impl<S: GlyphServicePort, D: DeviceIdentityPort> SessionManager<S, D> {
    pub fn new(service: S, identity: D) -> Self {
        Self {
            service,
            identity,
            state: SessionState::Unbound,
            profile: None,
            binding_requested: false,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Ready to dispatch frames.
    pub fn is_ready(&self) -> bool {
        self.state == SessionState::SessionOpen
    }

    pub fn profile(&self) -> Option<HardwareProfile> {
        self.profile
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Request the service binding.  The state stays `Unbound` until the
    /// service confirms with [`ServiceEvent::Connected`].
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.binding_requested = true;
        sink.emit(&AppEvent::Status(StatusText::BindingService));
        info!("Session: binding glyph service");
        self.service.bind();
    }

    /// Handle a connect notification.  Returns `true` if a session is now
    /// open and the caller should run one composition pass.
    pub fn on_connected(&mut self, sink: &mut impl EventSink) -> bool {
        if !self.binding_requested {
            warn!("Session: connect callback without a binding request, ignored");
            return false;
        }

        self.transition(SessionState::Bound, sink);
        sink.emit(&AppEvent::Status(StatusText::ServiceConnected));

        let device = self.identity.current_device();
        let profile = profile::resolve(&device);
        info!("Session: device '{}' resolved to {}", device.model(), profile);
        self.profile = Some(profile);

        if self.service.register(profile) {
            self.transition(SessionState::Registered, sink);
        } else {
            warn!("Session: register({}) refused, opening session anyway", profile);
            sink.emit(&AppEvent::Warning(Warning::RegisterFailed));
            sink.emit(&AppEvent::Status(StatusText::RegisterFailed));
        }

        if let Err(e) = self.service.open_session() {
            error!("Session: open failed: {}", e);
            sink.emit(&AppEvent::Warning(Warning::SessionError(e)));
            return false;
        }

        self.transition(SessionState::SessionOpen, sink);
        sink.emit(&AppEvent::Status(StatusText::SessionOpen));

        // Residue from a previous run or crash.
        if let Err(e) = self.service.turn_off() {
            debug!("Session: initial clear failed: {}", e);
        }
        true
    }

    /// Handle a disconnect notification.  Ignored once the binding has
    /// been released, so a late callback cannot resurrect `Disconnected`.
    pub fn on_disconnected(&mut self, sink: &mut impl EventSink) {
        if !self.binding_requested {
            debug!("Session: disconnect callback without a binding request, ignored");
            return;
        }

        self.transition(SessionState::Disconnected, sink);
        self.profile = None;
        sink.emit(&AppEvent::Status(StatusText::ServiceDisconnected));

        // The service side has already dropped the session.
        if let Err(e) = self.service.close_session() {
            debug!("Session: close after disconnect failed: {}", e);
        }
    }

    /// Close whatever may be open and release the binding.
    pub fn shutdown(&mut self, sink: &mut impl EventSink) {
        if self.state.may_hold_session() {
            if let Err(e) = self.service.close_session() {
                debug!("Session: close on shutdown failed: {}", e);
            }
        }
        self.service.unbind();
        self.binding_requested = false;
        self.profile = None;
        self.transition(SessionState::Unbound, sink);
        info!("Session: binding released");
    }

    // ── Dispatch ──────────────────────────────────────────────

    /// Compose `zones` onto the hardware if the session is open.
    ///
    /// Returns `None` when not ready: the request is dropped.
    pub fn dispatch(&mut self, zones: &ZoneState) -> Option<Result<Composition, GlyphError>> {
        if !self.is_ready() {
            debug!("Session: not ready ({}), dispatch dropped", self.state.name());
            return None;
        }
        Some(compose::compose(&mut self.service, zones))
    }

    // ── Internal ──────────────────────────────────────────────

    fn transition(&mut self, next: SessionState, sink: &mut impl EventSink) {
        let prev = self.state;
        if prev == next {
            return;
        }
        info!("Session transition: {} -> {}", prev.name(), next.name());
        self.state = next;
        sink.emit(&AppEvent::SessionChanged { from: prev, to: next });
    }
}
