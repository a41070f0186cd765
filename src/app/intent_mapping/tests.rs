use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{ControlSet, DragTarget};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn pointer_pressed_maps_to_begin_drag_when_idle() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: Vec2::new(1.0, 2.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginDrag { pos } if pos == Vec2::new(1.0, 2.0)));
}

#[test]
fn pointer_pressed_is_dropped_while_dragging() {
    let mut state = AppState::new();
    let controls = *state.curve.controls();
    assert_eq!(
        state.interaction.on_pointer_down(&controls, controls.start),
        DragTarget::Start
    );

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: controls.end,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_moved_without_drag_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: Vec2::new(5.0, 5.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn zero_scroll_maps_to_nothing() {
    let state = AppState::new();

    assert!(map_intent_to_commands(&state, AppIntent::Scrolled { delta: 0.0 }).is_empty());
    let commands = map_intent_to_commands(&state, AppIntent::Scrolled { delta: -1.0 });
    assert!(matches!(commands[0], AppCommand::AdjustSampleCount { delta } if delta < 0.0));
}

#[test]
fn curve_placement_clamps_sample_count() {
    let state = AppState::new();
    let controls = ControlSet::new(Vec2::ZERO, Vec2::ONE, Vec2::X);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CurvePlacementRequested {
            controls,
            sample_count: 0,
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::PlaceCurve { sample_count, .. } => assert_eq!(sample_count.get(), 2),
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn reset_curve_ends_drag_then_places_defaults() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetCurveRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::EndDrag));
    match &commands[1] {
        AppCommand::PlaceCurve {
            controls,
            sample_count,
        } => {
            assert_eq!(*controls, state.options.initial_controls());
            assert_eq!(sample_count.get(), 100);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}
