//! Frame composition failure handling and primitive selection.

use glyphglow::app::commands::AppCommand;
use glyphglow::app::events::{AppEvent, Warning};
use glyphglow::compose::{Composition, DisplayMode};
use glyphglow::error::GlyphError;
use glyphglow::zones::Zone;

use crate::mock_hw::{GlyphCall, ready_app};

#[test]
fn every_pass_starts_with_clear() {
    let (mut app, mut sink) = ready_app();

    app.handle_command(AppCommand::ToggleA(true), &mut sink);
    app.handle_command(AppCommand::ToggleB(true), &mut sink);

    let calls = app.service().calls();
    let clears: Vec<usize> = calls
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == GlyphCall::TurnOff)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(clears.len(), 2);
    assert_eq!(clears[0], 0);
    assert!(calls[clears[1] - 1].is_display(), "second clear follows first display");
}

#[test]
fn build_failure_warns_and_keeps_state() {
    let (mut app, mut sink) = ready_app();
    app.service_mut().fail_build = true;

    app.handle_command(AppCommand::ToggleB(true), &mut sink);

    assert!(app.zones().zone_b(), "zone state is optimistic");
    assert!(app.service().display_calls().is_empty());
    assert_eq!(
        sink.events,
        vec![AppEvent::Warning(Warning::DispatchFailed(
            GlyphError::FrameBuildFailed
        ))]
    );
    assert!(app.is_ready(), "dispatch failure never tears down the session");
}

#[test]
fn display_failure_warns() {
    let (mut app, mut sink) = ready_app();
    app.service_mut().fail_display = true;
    let before = app.compose_count();

    app.handle_command(
        AppCommand::SetC {
            percent: 10,
            from_user: true,
        },
        &mut sink,
    );

    assert_eq!(
        sink.events,
        vec![AppEvent::Warning(Warning::DispatchFailed(
            GlyphError::DisplayFailed
        ))]
    );
    assert_eq!(app.compose_count(), before, "failed passes are not counted");
}

#[test]
fn next_success_recovers_after_failure() {
    let (mut app, mut sink) = ready_app();
    app.service_mut().fail_display = true;
    app.handle_command(AppCommand::ToggleA(true), &mut sink);
    app.service_mut().fail_display = false;
    sink.events.clear();

    app.handle_command(AppCommand::ToggleB(true), &mut sink);

    assert_eq!(sink.warnings(), 0);
    assert_eq!(
        app.service().last_display(),
        Some(GlyphCall::DisplayStatic {
            zones: vec![Zone::A, Zone::B]
        })
    );
}

#[test]
fn clear_failure_does_not_stop_composition() {
    let (mut app, mut sink) = ready_app();
    app.service_mut().fail_turn_off = true;

    app.handle_command(AppCommand::ToggleA(true), &mut sink);

    assert_eq!(app.service().display_calls().len(), 1);
    assert_eq!(sink.warnings(), 0);
}

#[test]
fn composed_event_describes_the_frame() {
    let (mut app, mut sink) = ready_app();

    app.handle_command(
        AppCommand::SetC {
            percent: 100,
            from_user: true,
        },
        &mut sink,
    );

    match sink.events.as_slice() {
        [AppEvent::Composed(Composition::Displayed(plan))] => {
            assert_eq!(plan.zones(), &[Zone::C]);
            assert_eq!(
                plan.mode(),
                DisplayMode::Progress {
                    percent: 100,
                    looping: false
                }
            );
        }
        other => panic!("unexpected events: {other:?}"),
    }
}

#[test]
fn turning_everything_off_reports_blank() {
    let (mut app, mut sink) = ready_app();
    app.handle_command(AppCommand::ToggleB(true), &mut sink);
    sink.events.clear();

    app.handle_command(AppCommand::ToggleB(false), &mut sink);

    assert_eq!(sink.events, vec![AppEvent::Composed(Composition::Blank)]);
}

#[test]
fn progress_switches_to_static_when_b_joins() {
    let (mut app, mut sink) = ready_app();
    app.handle_command(
        AppCommand::SetC {
            percent: 33,
            from_user: true,
        },
        &mut sink,
    );
    assert!(matches!(
        app.service().last_display(),
        Some(GlyphCall::DisplayProgress { percent: 33, .. })
    ));

    app.handle_command(AppCommand::ToggleB(true), &mut sink);
    assert_eq!(
        app.service().last_display(),
        Some(GlyphCall::DisplayStatic {
            zones: vec![Zone::B, Zone::C]
        })
    );

    app.handle_command(AppCommand::ToggleB(false), &mut sink);
    assert_eq!(
        app.service().last_display(),
        Some(GlyphCall::DisplayProgress {
            zones: vec![Zone::C],
            percent: 33,
            looping: false
        })
    );
}
