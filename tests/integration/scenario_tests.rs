//! End-to-end scenarios: UI command → AppService → session → mock service.

use glyphglow::app::commands::AppCommand;
use glyphglow::app::events::{AppEvent, Warning};
use glyphglow::session::{ServiceEvent, SessionState};
use glyphglow::zones::Zone;

use crate::mock_hw::{GlyphCall, MockGlyphService, ready_app, unbound_app};

fn set_c(percent: i32) -> AppCommand {
    AppCommand::SetC {
        percent,
        from_user: true,
    }
}

// ── A: all off, ready → clear only ────────────────────────────

#[test]
fn all_zones_off_clears_without_display() {
    let (mut app, mut sink) = ready_app();

    app.handle_command(AppCommand::ToggleA(false), &mut sink);

    assert_eq!(app.service().calls(), vec![GlyphCall::TurnOff]);
    assert!(app.service().display_calls().is_empty());
}

// ── B: A only → static frame with A ───────────────────────────

#[test]
fn zone_a_alone_is_displayed_static() {
    let (mut app, mut sink) = ready_app();

    app.handle_command(AppCommand::ToggleA(true), &mut sink);

    assert_eq!(
        app.service().calls(),
        vec![
            GlyphCall::TurnOff,
            GlyphCall::Include(Zone::A),
            GlyphCall::Build,
            GlyphCall::DisplayStatic {
                zones: vec![Zone::A]
            },
        ]
    );
}

// ── C: C only → progress at C ─────────────────────────────────

#[test]
fn zone_c_alone_is_displayed_as_progress() {
    let (mut app, mut sink) = ready_app();

    app.handle_command(set_c(40), &mut sink);

    assert_eq!(
        app.service().last_display(),
        Some(GlyphCall::DisplayProgress {
            zones: vec![Zone::C],
            percent: 40,
            looping: false,
        })
    );
}

// ── D: A + C → static, C still drawn ──────────────────────────

#[test]
fn zone_a_with_c_is_static_not_progress() {
    let (mut app, mut sink) = ready_app();

    app.handle_command(AppCommand::ToggleA(true), &mut sink);
    app.handle_command(set_c(40), &mut sink);

    assert_eq!(
        app.service().last_display(),
        Some(GlyphCall::DisplayStatic {
            zones: vec![Zone::A, Zone::C]
        })
    );
    assert!(
        !app
            .service()
            .calls()
            .iter()
            .any(|c| matches!(c, GlyphCall::DisplayProgress { .. })),
        "progress mode must not be used while A is on"
    );
}

// ── E: registration refused, session still opens ─────────────

#[test]
fn refused_registration_still_reaches_session_open() {
    let mut service = MockGlyphService::new();
    service.reject_registration = true;
    let (mut app, mut sink) = unbound_app(service);
    app.handle_command(AppCommand::ToggleB(true), &mut sink);

    app.start(&mut sink);
    app.handle_service_event(ServiceEvent::Connected, &mut sink);

    assert_eq!(app.session_state(), SessionState::SessionOpen);
    assert_eq!(sink.warnings(), 1);
    assert!(sink
        .events
        .contains(&AppEvent::Warning(Warning::RegisterFailed)));
    assert_eq!(
        app.service().last_display(),
        Some(GlyphCall::DisplayStatic {
            zones: vec![Zone::B]
        })
    );
}

// ── F: disconnect → no dispatch until reconnect ───────────────

#[test]
fn disconnect_stops_dispatch_until_reconnect() {
    let (mut app, mut sink) = ready_app();

    app.handle_service_event(ServiceEvent::Disconnected, &mut sink);
    assert_eq!(app.session_state(), SessionState::Disconnected);
    assert_eq!(app.service().calls(), vec![GlyphCall::CloseSession]);

    app.service().clear_calls();
    app.handle_command(AppCommand::ToggleA(true), &mut sink);
    app.handle_command(set_c(25), &mut sink);
    app.handle_command(AppCommand::ToggleB(true), &mut sink);
    assert!(app.service().calls().is_empty(), "no hardware I/O while disconnected");
    assert!(app.zones().zone_a() && app.zones().zone_b());
    assert_eq!(app.zones().zone_c(), 25);

    app.handle_service_event(ServiceEvent::Connected, &mut sink);
    assert!(app.is_ready());
    assert_eq!(
        app.service().display_calls(),
        vec![GlyphCall::DisplayStatic {
            zones: vec![Zone::A, Zone::B, Zone::C]
        }],
        "exactly one pass with the latest state"
    );
}

#[test]
fn failed_close_on_disconnect_is_swallowed() {
    let (mut app, mut sink) = ready_app();
    app.service_mut().fail_close = true;

    app.handle_service_event(ServiceEvent::Disconnected, &mut sink);

    assert_eq!(app.session_state(), SessionState::Disconnected);
    assert_eq!(sink.warnings(), 0);
}

// ── Programmatic slider moves ────────────────────────────────

#[test]
fn programmatic_c_updates_store_without_dispatch() {
    let (mut app, mut sink) = ready_app();

    app.handle_command(
        AppCommand::SetC {
            percent: 70,
            from_user: false,
        },
        &mut sink,
    );

    assert_eq!(app.zones().zone_c(), 70);
    assert!(app.service().calls().is_empty());
}

#[test]
fn zero_jitter_on_c_never_dispatches() {
    let (mut app, mut sink) = ready_app();
    let before = app.compose_count();

    for _ in 0..5 {
        app.handle_command(set_c(0), &mut sink);
    }

    assert!(app.service().calls().is_empty());
    assert_eq!(app.compose_count(), before);
}

#[test]
fn c_back_to_zero_blanks_output() {
    let (mut app, mut sink) = ready_app();
    app.handle_command(set_c(60), &mut sink);
    app.service().clear_calls();

    app.handle_command(set_c(0), &mut sink);

    assert_eq!(app.service().calls(), vec![GlyphCall::TurnOff]);
}
