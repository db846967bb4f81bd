//! GlyphGlow controller library.
//!
//! Composes three UI-facing zones into one glyph LED frame and keeps a
//! session with the vendor glyph service alive across asynchronous
//! connects and disconnects.  Everything that talks to the real service
//! sits behind the port traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod compose;
pub mod config;
pub mod error;
pub mod profile;
pub mod session;
pub mod zones;
