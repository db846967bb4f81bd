//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against the mock glyph service.  All tests run on the host with no
//! real hardware required.

mod composition_tests;
mod scenario_tests;
