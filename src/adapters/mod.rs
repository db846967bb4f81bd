//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements          | Connects to               |
//! |----------------|---------------------|---------------------------|
//! | `config_file`  | ConfigPort          | JSON file on disk         |
//! | `device_id`    | DeviceIdentityPort  | Env var / config          |
//! | `log_sink`     | EventSink           | `log` facade              |
//! | `sim_glyph`    | GlyphServicePort    | In-memory simulated LEDs  |

pub mod config_file;
pub mod device_id;
pub mod log_sink;
pub mod sim_glyph;
