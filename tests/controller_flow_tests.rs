use corner_cutting_curves::app::handlers::snapshot::NO_SNAPSHOT_MESSAGE;
use corner_cutting_curves::{AppCommand, AppController, AppIntent, AppState};
use corner_cutting_curves::{CurveOptions, SegmentJoin, SessionPhase, MAX_CURVE, MAX_VERTEX};
use glam::Vec2;

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointCommitRequested {
                pos: Vec2::new(x, y),
            },
        )
        .expect("PointCommitRequested sollte ohne Fehler durchlaufen");
}

#[test]
fn test_four_clicks_build_one_segment() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
        click(&mut controller, &mut state, x, y);
    }

    assert_eq!(state.session.phase(), SessionPhase::Building);
    assert_eq!(state.segment_count(), 1);
    assert_eq!(state.point_count(), 5);
    assert_eq!(
        state.session.points()[4].position,
        Vec2::new(-1.0, 1.0),
        "Anker sollte last + (last - second_to_last) sein"
    );
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_click_keeps_live_preview_at_click_position() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 0.3, 0.4);

    assert_eq!(state.point_count(), 1);
    assert_eq!(state.session.live_point(), Some(Vec2::new(0.3, 0.4)));
}

#[test]
fn test_pointer_moves_are_not_logged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for i in 0..10 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::PointerMoved {
                    pos: Vec2::splat(i as f32 * 0.05),
                },
            )
            .expect("PointerMoved sollte ohne Fehler durchlaufen");
    }

    assert!(state.command_log.is_empty());
    assert_eq!(state.point_count(), 0);
    assert_eq!(state.session.live_point(), Some(Vec2::splat(9.0 * 0.05)));
}

#[test]
fn test_save_clear_load_round_trip() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, y) in [(0.0, 0.0), (0.5, 0.0), (0.5, 0.5), (0.0, 0.5), (-0.5, 0.5)] {
        click(&mut controller, &mut state, x, y);
    }
    let points_before: Vec<_> = state.session.points().to_vec();

    controller
        .handle_intent(&mut state, AppIntent::SaveSnapshotRequested)
        .expect("SaveSnapshotRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .expect("ClearRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 0);
    assert_eq!(state.session.phase(), SessionPhase::Empty);

    controller
        .handle_intent(&mut state, AppIntent::LoadSnapshotRequested)
        .expect("LoadSnapshotRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.points(), points_before.as_slice());

    let logged: Vec<_> = state.command_log.entries().iter().rev().take(3).collect();
    assert_eq!(
        logged,
        vec![
            &AppCommand::RestoreSnapshot,
            &AppCommand::ClearSession,
            &AppCommand::SaveSnapshot
        ]
    );
}

#[test]
fn test_load_without_snapshot_sets_status_and_keeps_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.1, 0.1);
    click(&mut controller, &mut state, 0.2, 0.2);

    controller
        .handle_intent(&mut state, AppIntent::LoadSnapshotRequested)
        .expect("Laden ohne Snapshot sollte kein Fehler sein");

    assert_eq!(state.point_count(), 2);
    assert_eq!(state.ui.status_message.as_deref(), Some(NO_SNAPSHOT_MESSAGE));
}

#[test]
fn test_clicks_beyond_capacity_are_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for i in 0..150 {
        let t = i as f32 / 150.0;
        click(&mut controller, &mut state, t * 2.0 - 1.0, (t * 13.0).cos() * 0.8);
    }

    assert_eq!(state.point_count(), MAX_VERTEX);
    assert_eq!(state.session.phase(), SessionPhase::Finalized);

    let scene = controller.build_render_scene(&state, [1024.0, 600.0]);
    assert!(scene.handles.is_empty());
    assert_eq!(scene.curve.len(), state.segment_count() * MAX_CURVE);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_viewport_and_marker_toggle_update_view_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 450.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ToggleAllMarkersRequested)
        .expect("ToggleAllMarkersRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.viewport_size, [800.0, 450.0]);
    assert!(state.view.show_all_markers);
    assert_eq!(state.marker_window(), 0);
}

#[test]
fn test_options_drive_session_style() {
    let options = CurveOptions {
        segment_join: SegmentJoin::Shared,
        ..CurveOptions::default()
    };
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
        click(&mut controller, &mut state, x, y);
    }

    assert_eq!(state.session.segment_join(), SegmentJoin::Shared);
    assert_eq!(state.point_count(), 6);
}

#[test]
fn test_save_options_writes_toml_file() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.marker_window = 9;
    state.options_path = std::env::temp_dir().join(format!(
        "corner_cutting_curves_flow_{}.toml",
        std::process::id()
    ));

    controller
        .handle_intent(&mut state, AppIntent::SaveOptionsRequested)
        .expect("SaveOptionsRequested sollte ohne Fehler durchlaufen");

    let loaded = CurveOptions::load_from_file(&state.options_path);
    let _ = std::fs::remove_file(&state.options_path);
    assert_eq!(loaded.marker_window, 9);
}

#[test]
fn test_save_options_to_unwritable_path_returns_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options_path = std::env::temp_dir()
        .join("corner_cutting_curves_missing_dir")
        .join("nested")
        .join("options.toml");

    let result = controller.handle_intent(&mut state, AppIntent::SaveOptionsRequested);

    assert!(result.is_err());
}
