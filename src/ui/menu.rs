//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState};
use crate::shared::LineRenderMode;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Kurve zurücksetzen").clicked() {
                    events.push(AppIntent::ResetCurveRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                ui.menu_button("Linie", |ui| {
                    let mode = state.options.line_mode;

                    for candidate in [LineRenderMode::NativeStrip, LineRenderMode::TessellatedQuads]
                    {
                        if ui
                            .selectable_label(mode == candidate, candidate.label())
                            .clicked()
                        {
                            events.push(AppIntent::LineRenderModeChanged { mode: candidate });
                            ui.close();
                        }
                    }
                });

                let mut show_samples = state.options.show_sample_points;
                if ui.checkbox(&mut show_samples, "Sample-Punkte").changed() {
                    events.push(AppIntent::SamplePointsToggled {
                        visible: show_samples,
                    });
                }
            });
        });
    });

    events
}
