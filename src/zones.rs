//! Zone state store.
//!
//! Three independently controllable zones: A and B are on/off, C is a
//! 0–100 level.  "C is active" means `zone_c > 0`.
//!
//! The store is optimistic: writes always land, whether or not the
//! hardware session is up.  Only the latest value matters when a session
//! (re)opens; there is no history of missed writes.

use core::fmt;

/// Upper bound of zone C.
pub const ZONE_C_MAX: u8 = 100;

/// Identifies one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    A,
    B,
    C,
}

impl Zone {
    /// Fixed draw order used when building a frame.
    pub const ALL: [Zone; 3] = [Zone::A, Zone::B, Zone::C];
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Current value of all three zones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneState {
    zone_a: bool,
    zone_b: bool,
    zone_c: u8,
}

impl ZoneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zone_a(&self) -> bool {
        self.zone_a
    }

    pub fn zone_b(&self) -> bool {
        self.zone_b
    }

    pub fn zone_c(&self) -> u8 {
        self.zone_c
    }

    pub fn is_active(&self, zone: Zone) -> bool {
        match zone {
            Zone::A => self.zone_a,
            Zone::B => self.zone_b,
            Zone::C => self.zone_c > 0,
        }
    }

    /// True when nothing should be shown.
    pub fn is_blank(&self) -> bool {
        !self.zone_a && !self.zone_b && self.zone_c == 0
    }

    pub fn set_a(&mut self, on: bool) {
        self.zone_a = on;
    }

    pub fn set_b(&mut self, on: bool) {
        self.zone_b = on;
    }

    /// Store a new C level, clamped into `0..=100`.
    ///
    /// Returns whether the write should trigger a composition: only when
    /// the active/inactive boundary was crossed, or C is on after the
    /// write.  Slider jitter at zero never re-dispatches.
    pub fn set_c(&mut self, percent: i32) -> bool {
        let was_on = self.zone_c > 0;
        self.zone_c = percent.clamp(0, ZONE_C_MAX as i32) as u8;
        let is_on = self.zone_c > 0;
        was_on != is_on || is_on
    }
}
