//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Samples: {} | Segmente: {}",
                state.curve.sample_count().get(),
                state.segment_count()
            ));

            ui.separator();

            ui.label(format!(
                "Drag: {}",
                state.interaction.drag_state().target().label()
            ));

            ui.separator();

            ui.label(format!("Linie: {}", state.options.line_mode.label()));

            ui.separator();

            ui.label(format!(
                "Drags: {} | Scrolls: {}",
                state.command_log.drags_started(),
                state.command_log.sample_adjustments()
            ));

            ui.separator();

            ui.label("Mausrad: Sample-Anzahl ändern");
        });
    });
}
