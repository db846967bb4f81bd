//! Frame composer and dispatcher.
//!
//! Turns a [`ZoneState`] into exactly one display call:
//!
//! ```text
//!   turn_off ──▶ blank? ──yes──▶ done (nothing displayed)
//!                  │ no
//!                  ▼
//!   builder.include(A?, B?, C?) ──▶ build
//!                  │
//!        C only? ──┼── yes ──▶ display_progress(frame, C, looping=false)
//!                  └── no  ──▶ display_static(frame)
//! ```
//!
//! The progress primitive is only meaningful when C is the sole active
//! zone.  Mixed with A or B, C's sub-pattern is still drawn but shown
//! statically.

use log::{debug, warn};

use crate::app::ports::{FrameBuilder, GlyphServicePort};
use crate::error::GlyphError;
use crate::zones::{Zone, ZoneState};

/// How a composed frame is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Static,
    Progress { percent: u8, looping: bool },
}

/// The pure description of one composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    zones: heapless::Vec<Zone, 3>,
    mode: DisplayMode,
}

impl FramePlan {
    /// Plan the frame for `state`, or `None` when every zone is off.
    pub fn for_zones(state: &ZoneState) -> Option<Self> {
        if state.is_blank() {
            return None;
        }

        // Capacity equals the number of zones.
        let zones: heapless::Vec<Zone, 3> = Zone::ALL
            .into_iter()
            .filter(|&zone| state.is_active(zone))
            .collect();

        let c_only = state.is_active(Zone::C) && !state.zone_a() && !state.zone_b();
        let mode = if c_only {
            DisplayMode::Progress {
                percent: state.zone_c(),
                looping: false,
            }
        } else {
            DisplayMode::Static
        };

        Some(Self { zones, mode })
    }

    /// Zones whose sub-patterns go into the frame, in draw order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }
}

/// Outcome of a successful composition pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// All zones off: output cleared, no frame displayed.
    Blank,
    Displayed(FramePlan),
}

/// Clear the hardware and display the frame for `state`.
///
/// A failed clear is logged and composition carries on; build and
/// display failures are returned to the caller.
pub fn compose<S: GlyphServicePort>(
    service: &mut S,
    state: &ZoneState,
) -> Result<Composition, GlyphError> {
    if let Err(e) = service.turn_off() {
        warn!("Compose: clear failed ({}), continuing", e);
    }

    let Some(plan) = FramePlan::for_zones(state) else {
        debug!("Compose: all zones off, output left blank");
        return Ok(Composition::Blank);
    };

    let mut builder = service.frame_builder()?;
    for zone in plan.zones() {
        builder.include(*zone);
    }
    let frame = builder.build()?;

    match plan.mode() {
        DisplayMode::Static => service.display_static(frame)?,
        DisplayMode::Progress { percent, looping } => {
            service.display_progress(frame, percent, looping)?;
        }
    }

    debug!("Compose: displayed {:?} as {:?}", plan.zones(), plan.mode());
    Ok(Composition::Displayed(plan))
}
