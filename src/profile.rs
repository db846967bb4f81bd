//! Hardware profile resolution.
//!
//! The glyph service must be told which device layout it is driving
//! before zone sub-patterns map onto the right LEDs.  The profile is
//! picked from an ordered rule table, evaluated top to bottom:
//!
//! ```text
//! ┌────┬──────────────────────┬──────────────┐
//! │ #  │ model code           │ profile      │
//! ├────┼──────────────────────┼──────────────┤
//! │ 1  │ A142P…  (2a Plus)    │ Device23113  │
//! │ 2  │ A142…   (2a)         │ Device23111  │
//! │ 3  │ A059…   (3a / Pro)   │ Device24111  │
//! │ 4  │ A065…   (2)          │ Device22111  │
//! │ 5  │ A063…   (1)          │ Device20111  │
//! │ *  │ anything else        │ Generic      │
//! └────┴──────────────────────┴──────────────┘
//! ```
//!
//! Row 1 must stay above row 2: every `A142P` model also starts with `A142`.

use core::fmt;

/// Capacity of the model code buffer.
pub const DEVICE_MODEL_CAP: usize = 32;

// ---------------------------------------------------------------------------
// Device identity
// ---------------------------------------------------------------------------

/// Opaque identity of the device we are running on.
///
/// Concretely the vendor model code (e.g. `A142P`).  Longer inputs are
/// truncated to [`DEVICE_MODEL_CAP`] bytes on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceIdentity {
    model: heapless::String<DEVICE_MODEL_CAP>,
}

impl DeviceIdentity {
    pub fn from_model(model: &str) -> Self {
        let mut buf = heapless::String::new();
        for ch in model.trim().chars() {
            if buf.push(ch).is_err() {
                break;
            }
        }
        Self { model: buf }
    }

    pub fn model(&self) -> &str {
        self.model.as_str()
    }

    /// Case-insensitive prefix match on the model code.
    pub fn model_starts_with(&self, prefix: &str) -> bool {
        self.model
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Registration target understood by the glyph service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardwareProfile {
    Device20111,
    Device22111,
    Device23111,
    Device23113,
    Device24111,
    /// No specific layout; the service picks its own default.
    Generic,
}

impl HardwareProfile {
    /// Vendor device code, or `None` for the generic fallback.
    pub const fn device_code(self) -> Option<&'static str> {
        match self {
            Self::Device20111 => Some("20111"),
            Self::Device22111 => Some("22111"),
            Self::Device23111 => Some("23111"),
            Self::Device23113 => Some("23113"),
            Self::Device24111 => Some("24111"),
            Self::Generic => None,
        }
    }
}

impl fmt::Display for HardwareProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.device_code() {
            Some(code) => write!(f, "DEVICE_{code}"),
            None => write!(f, "generic"),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// Predicate over the device identity.
pub type ProfilePredicate = fn(&DeviceIdentity) -> bool;

/// One row of the resolution table.
pub struct ProfileRule {
    pub name: &'static str,
    pub matches: ProfilePredicate,
    pub profile: HardwareProfile,
}

/// Ordered rule table, most specific device first.
pub const PROFILE_TABLE: [ProfileRule; 5] = [
    ProfileRule {
        name: "Phone (2a) Plus",
        matches: is_23113,
        profile: HardwareProfile::Device23113,
    },
    ProfileRule {
        name: "Phone (2a)",
        matches: is_23111,
        profile: HardwareProfile::Device23111,
    },
    ProfileRule {
        name: "Phone (3a)",
        matches: is_24111,
        profile: HardwareProfile::Device24111,
    },
    ProfileRule {
        name: "Phone (2)",
        matches: is_22111,
        profile: HardwareProfile::Device22111,
    },
    ProfileRule {
        name: "Phone (1)",
        matches: is_20111,
        profile: HardwareProfile::Device20111,
    },
];

fn is_23113(id: &DeviceIdentity) -> bool {
    id.model_starts_with("A142P")
}

fn is_23111(id: &DeviceIdentity) -> bool {
    id.model_starts_with("A142")
}

fn is_24111(id: &DeviceIdentity) -> bool {
    id.model_starts_with("A059")
}

fn is_22111(id: &DeviceIdentity) -> bool {
    id.model_starts_with("A065")
}

fn is_20111(id: &DeviceIdentity) -> bool {
    id.model_starts_with("A063")
}

/// Resolve the profile for `identity`.  Total: unknown devices get
/// [`HardwareProfile::Generic`].
pub fn resolve(identity: &DeviceIdentity) -> HardwareProfile {
    PROFILE_TABLE
        .iter()
        .find(|rule| (rule.matches)(identity))
        .map_or(HardwareProfile::Generic, |rule| rule.profile)
}
