//! Handler für Darstellungs-Einstellungen.

use crate::app::AppState;
use crate::shared::LineRenderMode;

/// Setzt die Zeichenstrategie der Linie.
pub fn set_line_render_mode(state: &mut AppState, mode: LineRenderMode) {
    if state.options.line_mode != mode {
        log::info!("Linienmodus: {}", mode.label());
    }
    state.options.line_mode = mode;
}

/// Blendet die Sample-Punkt-Marker ein oder aus.
pub fn set_sample_points_visible(state: &mut AppState, visible: bool) {
    state.options.show_sample_points = visible;
}
