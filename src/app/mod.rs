//! Application core: pure domain logic, zero I/O.
//!
//! Zone bookkeeping, session lifecycle and frame composition live here
//! and in the sibling domain modules.  All interaction with the glyph
//! service happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real hardware.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
