//! Handler für Kurven-Interaktion: Drag-Lifecycle, Sample-Anzahl, Platzierung.

use crate::app::AppState;
use crate::core::{ControlSet, SampleCount};
use glam::Vec2;

/// Startet einen Drag, wenn `pos` ein Handle trifft.
pub fn begin_drag(state: &mut AppState, pos: Vec2) {
    let controls = *state.curve.controls();
    state.interaction.on_pointer_down(&controls, pos);
}

/// Setzt das gezogene Handle auf `pos`.
pub fn update_drag(state: &mut AppState, pos: Vec2) {
    state.interaction.on_pointer_move(&mut state.curve, pos);
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    state.interaction.on_pointer_up();
}

/// Passt die Sample-Anzahl anhand der Scroll-Richtung an.
pub fn adjust_sample_count(state: &mut AppState, delta: f32) {
    state.interaction.on_scroll(&mut state.curve, delta);
}

/// Ersetzt Steuerpunkte und Sample-Anzahl (alles oder nichts).
pub fn place_curve(
    state: &mut AppState,
    controls: ControlSet,
    sample_count: SampleCount,
) -> anyhow::Result<()> {
    state.curve.update(controls, sample_count)?;
    log::info!(
        "Kurve platziert: Start ({:.1}, {:.1}), Ende ({:.1}, {:.1}), Steuerpunkt ({:.1}, {:.1}), {} Samples",
        controls.start.x,
        controls.start.y,
        controls.end.x,
        controls.end.y,
        controls.control.x,
        controls.control.y,
        sample_count.get()
    );
    Ok(())
}
