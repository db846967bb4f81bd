//! GlyphGlow host simulator entry point.
//!
//! Plays the UI collaborator and the OS integration layer around the
//! controller core, so the session and composition logic can be driven
//! from a terminal.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  stdin ──▶ Input ──▶ AppCommand ──┐                       │
//! │                                   ▼                       │
//! │  SimGlyphService ──ServiceEvent──▶ AppService ──▶ LogSink │
//! │        ▲                           │                      │
//! │        └──────── GlyphServicePort ─┘                      │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `glyphglow [config.json]`, then one command per line:
//! `a on|off`, `b on|off`, `c <0-100> [prog]`, `connect`, `disconnect`,
//! `status`, `help`, `quit`.

use std::io::BufRead;

use anyhow::{Context, Result};
use log::{info, warn};

use glyphglow::adapters::config_file::JsonConfigFile;
use glyphglow::adapters::device_id::StaticDeviceIdentity;
use glyphglow::adapters::log_sink::LogEventSink;
use glyphglow::adapters::sim_glyph::SimGlyphService;
use glyphglow::app::commands::AppCommand;
use glyphglow::app::service::AppService;
use glyphglow::config::SystemConfig;

const DEFAULT_CONFIG_PATH: &str = "glyphglow.json";

// ── Input parsing ─────────────────────────────────────────────

/// One line of simulator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Command(AppCommand),
    Reconnect,
    Disconnect,
    Status,
    Help,
    Quit,
}

fn parse_switch(word: Option<&str>) -> Option<bool> {
    match word? {
        "on" | "1" | "true" => Some(true),
        "off" | "0" | "false" => Some(false),
        _ => None,
    }
}

fn parse_input(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let input = match words.next()? {
        "a" => Input::Command(AppCommand::ToggleA(parse_switch(words.next())?)),
        "b" => Input::Command(AppCommand::ToggleB(parse_switch(words.next())?)),
        "c" => {
            let percent = words.next()?.parse().ok()?;
            let from_user = words.next() != Some("prog");
            Input::Command(AppCommand::SetC { percent, from_user })
        }
        "connect" => Input::Reconnect,
        "disconnect" => Input::Disconnect,
        "status" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        _ => return None,
    };
    Some(input)
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Config (before logging, it carries the log filter) ─
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let store = JsonConfigFile::new(&path);
    let loaded = SystemConfig::load(&store);
    let filter = loaded
        .as_ref()
        .map_or_else(|_| SystemConfig::default().log_filter, |c| c.log_filter.clone());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = loaded.with_context(|| format!("loading config from {path}"))?;
    info!("GlyphGlow v{} (device model {})", env!("CARGO_PKG_VERSION"), config.device_model);

    // ── 2. Adapters + app service ─────────────────────────────
    let service = SimGlyphService::new(&config);
    let identity = StaticDeviceIdentity::from_env_or(&config.device_model);
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(service, identity);
    app.start(&mut sink);
    drain_callbacks(&mut app, &mut sink);

    // ── 3. Input loop ─────────────────────────────────────────
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_input(&line) {
            Some(Input::Command(cmd)) => app.handle_command(cmd, &mut sink),
            Some(Input::Reconnect) => app.service_mut().simulate_reconnect(),
            Some(Input::Disconnect) => app.service_mut().simulate_disconnect(),
            Some(Input::Status) => {
                let z = app.zones();
                println!(
                    "{} | session={} profile={} | A={} B={} C={} | output={:?}",
                    sink.last_status().unwrap_or("Status: -"),
                    app.session_state().name(),
                    app.profile().map_or_else(|| "-".to_string(), |p| p.to_string()),
                    z.zone_a(),
                    z.zone_b(),
                    z.zone_c(),
                    app.service().output(),
                );
            }
            Some(Input::Help) => {
                println!("a on|off, b on|off, c <0-100> [prog], connect, disconnect, status, quit");
            }
            Some(Input::Quit) => break,
            None => warn!("Unrecognised input: {:?}", line.trim()),
        }

        drain_callbacks(&mut app, &mut sink);
    }

    // ── 4. Teardown ───────────────────────────────────────────
    app.shutdown(&mut sink);
    Ok(())
}

/// Deliver every queued service callback to the app.
fn drain_callbacks(
    app: &mut AppService<SimGlyphService, StaticDeviceIdentity>,
    sink: &mut LogEventSink,
) {
    while let Some(event) = app.service_mut().take_event() {
        app.handle_service_event(event, sink);
    }
}
