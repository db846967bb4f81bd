//! Simulated glyph service for running on a development host.
//!
//! Implements [`GlyphServicePort`] in memory and logs every call.  The
//! real service answers `bind()` asynchronously; the simulator queues the
//! resulting [`ServiceEvent`] and the main loop drains it with
//! [`SimGlyphService::take_event`].

use log::{info, warn};

use crate::app::ports::{FrameBuilder, GlyphServicePort};
use crate::config::SystemConfig;
use crate::error::GlyphError;
use crate::profile::HardwareProfile;
use crate::session::ServiceEvent;
use crate::zones::Zone;

/// Maximum pending callbacks.
const PENDING_CAP: usize = 8;

/// A frame as the simulator sees it: the zones that were included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimFrame {
    pub zones: heapless::Vec<Zone, 3>,
}

/// Builder handed out by [`SimGlyphService::frame_builder`].
#[derive(Debug, Default)]
pub struct SimFrameBuilder {
    frame: SimFrame,
}

impl FrameBuilder for SimFrameBuilder {
    type Frame = SimFrame;

    fn include(&mut self, zone: Zone) {
        if self.frame.zones.contains(&zone) {
            return;
        }
        if let Err(zone) = self.frame.zones.push(zone) {
            warn!("SimGlyph: frame full, zone {} dropped", zone);
        }
    }

    fn build(self) -> Result<SimFrame, GlyphError> {
        Ok(self.frame)
    }
}

/// What the simulated LEDs currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SimOutput {
    #[default]
    Off,
    Static(SimFrame),
    Progress { frame: SimFrame, percent: u8 },
}

/// In-memory glyph service with fault injection.
#[derive(Debug, Default)]
pub struct SimGlyphService {
    reject_registration: bool,
    fail_session_open: bool,
    bound: bool,
    session_open: bool,
    output: SimOutput,
    pending: heapless::Deque<ServiceEvent, PENDING_CAP>,
}

impl SimGlyphService {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            reject_registration: config.reject_registration,
            fail_session_open: config.fail_session_open,
            ..Self::default()
        }
    }

    /// Next queued service callback, if any.
    pub fn take_event(&mut self) -> Option<ServiceEvent> {
        self.pending.pop_front()
    }

    /// Pretend the service process died.
    pub fn simulate_disconnect(&mut self) {
        self.session_open = false;
        self.output = SimOutput::Off;
        self.queue(ServiceEvent::Disconnected);
    }

    /// Pretend the service came back while we are still bound.
    pub fn simulate_reconnect(&mut self) {
        if self.bound {
            self.queue(ServiceEvent::Connected);
        } else {
            warn!("SIM | reconnect ignored, not bound");
        }
    }

    pub fn output(&self) -> &SimOutput {
        &self.output
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    fn queue(&mut self, event: ServiceEvent) {
        if self.pending.push_back(event).is_err() {
            warn!("SIM | callback queue full, {:?} dropped", event);
        }
    }

    fn require_session(&self) -> Result<(), GlyphError> {
        if self.session_open {
            Ok(())
        } else {
            Err(GlyphError::NotBound)
        }
    }
}

impl GlyphServicePort for SimGlyphService {
    type Frame = SimFrame;
    type Builder = SimFrameBuilder;

    fn bind(&mut self) {
        info!("SIM | bind");
        self.bound = true;
        self.queue(ServiceEvent::Connected);
    }

    fn unbind(&mut self) {
        info!("SIM | unbind");
        self.bound = false;
        self.session_open = false;
        self.output = SimOutput::Off;
        self.pending.clear();
    }

    fn register(&mut self, profile: HardwareProfile) -> bool {
        info!("SIM | register {}", profile);
        !self.reject_registration
    }

    fn open_session(&mut self) -> Result<(), GlyphError> {
        if self.fail_session_open || !self.bound {
            return Err(GlyphError::SessionOpenFailed);
        }
        info!("SIM | session opened");
        self.session_open = true;
        Ok(())
    }

    fn close_session(&mut self) -> Result<(), GlyphError> {
        if !self.session_open {
            return Err(GlyphError::SessionCloseFailed);
        }
        info!("SIM | session closed");
        self.session_open = false;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), GlyphError> {
        self.require_session().map_err(|_| GlyphError::TurnOffFailed)?;
        self.output = SimOutput::Off;
        Ok(())
    }

    fn frame_builder(&mut self) -> Result<SimFrameBuilder, GlyphError> {
        self.require_session()?;
        Ok(SimFrameBuilder::default())
    }

    fn display_static(&mut self, frame: SimFrame) -> Result<(), GlyphError> {
        self.require_session().map_err(|_| GlyphError::DisplayFailed)?;
        info!("SIM | toggle {:?}", frame.zones);
        self.output = SimOutput::Static(frame);
        Ok(())
    }

    fn display_progress(
        &mut self,
        frame: SimFrame,
        percent: u8,
        looping: bool,
    ) -> Result<(), GlyphError> {
        self.require_session().map_err(|_| GlyphError::DisplayFailed)?;
        info!("SIM | progress {:?} {}% loop={}", frame.zones, percent, looping);
        self.output = SimOutput::Progress { frame, percent };
        Ok(())
    }
}
