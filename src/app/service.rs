//! Application service, the hexagonal core.
//!
//! [`AppService`] owns the session manager and the zone store.  It is the
//! single logical actor: UI commands and service callbacks both arrive
//! through `&mut self`, so no locking is needed anywhere.
//!
//! ```text
//!  AppCommand ───▶ ┌──────────────────────────┐ ──▶ EventSink
//!                  │        AppService         │
//! ServiceEvent ──▶ │  Zones · Session · Compose│ ──▶ GlyphServicePort
//!                  └──────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::app::commands::AppCommand;
use crate::app::events::{AppEvent, Warning};
use crate::app::ports::{DeviceIdentityPort, EventSink, GlyphServicePort};
use crate::profile::HardwareProfile;
use crate::session::{ServiceEvent, SessionManager, SessionState};
use crate::zones::ZoneState;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService<S, D> {
    session: SessionManager<S, D>,
    zones: ZoneState,
    /// Composition passes that reached the hardware.
    compose_count: u64,
}

impl<S: GlyphServicePort, D: DeviceIdentityPort> AppService<S, D> {
    /// Construct the service.  Does **not** bind; call [`start`](Self::start).
    pub fn new(service: S, identity: D) -> Self {
        Self {
            session: SessionManager::new(service, identity),
            zones: ZoneState::new(),
            compose_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Request the service binding.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.session.start(sink);
    }

    /// Release the hardware.  Safe to call from any state.
    pub fn shutdown(&mut self, sink: &mut impl EventSink) {
        self.session.shutdown(sink);
        info!("AppService stopped after {} compositions", self.compose_count);
    }

    // ── Inbound ───────────────────────────────────────────────

    /// Process a connection notification from the glyph service.
    pub fn handle_service_event(&mut self, event: ServiceEvent, sink: &mut impl EventSink) {
        match event {
            ServiceEvent::Connected => {
                if self.session.on_connected(sink) {
                    // Re-apply whatever the UI holds now.
                    self.request_composition(sink);
                }
            }
            ServiceEvent::Disconnected => self.session.on_disconnected(sink),
        }
    }

    /// Process a UI command.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) {
        match cmd {
            AppCommand::ToggleA(on) => {
                self.zones.set_a(on);
                self.request_composition(sink);
            }
            AppCommand::ToggleB(on) => {
                self.zones.set_b(on);
                self.request_composition(sink);
            }
            AppCommand::SetC { percent, from_user } => {
                let honored = self.zones.set_c(percent);
                if from_user && honored {
                    self.request_composition(sink);
                } else {
                    debug!(
                        "Zone C -> {} stored without composing (from_user={})",
                        self.zones.zone_c(),
                        from_user
                    );
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn zones(&self) -> &ZoneState {
        &self.zones
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn is_ready(&self) -> bool {
        self.session.is_ready()
    }

    pub fn profile(&self) -> Option<HardwareProfile> {
        self.session.profile()
    }

    pub fn compose_count(&self) -> u64 {
        self.compose_count
    }

    pub fn service(&self) -> &S {
        self.session.service()
    }

    pub fn service_mut(&mut self) -> &mut S {
        self.session.service_mut()
    }

    // ── Internal ──────────────────────────────────────────────

    fn request_composition(&mut self, sink: &mut impl EventSink) {
        match self.session.dispatch(&self.zones) {
            None => {}
            Some(Ok(composition)) => {
                self.compose_count += 1;
                sink.emit(&AppEvent::Composed(composition));
            }
            Some(Err(e)) => {
                warn!("Composition failed: {}", e);
                sink.emit(&AppEvent::Warning(Warning::DispatchFailed(e)));
            }
        }
    }
}
