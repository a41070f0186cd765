//! Optionen-Dialog für Farben, Radien und Breiten.

use crate::app::{AppIntent, AppState};
use crate::render::{from_color32, to_color32};
use crate::shared::MIN_SAMPLE_COUNT;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Kurve ───────────────────────────────────────
                    ui.collapsing("Kurve", |ui| {
                        changed |= point_edit(ui, "Start:", &mut opts.initial_start);
                        changed |= point_edit(ui, "Ende:", &mut opts.initial_end);
                        changed |= point_edit(ui, "Steuerpunkt:", &mut opts.initial_control);
                        ui.horizontal(|ui| {
                            ui.label("Samples (Start):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.initial_sample_count)
                                        .range(MIN_SAMPLE_COUNT..=10_000),
                                )
                                .changed();
                        });
                    });

                    // ── Handles ─────────────────────────────────────
                    ui.collapsing("Handles", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.handle_radius)
                                        .range(2.0..=40.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Hit-Radius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.hit_radius)
                                        .range(2.0..=60.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Start:", &mut opts.start_color);
                        changed |= color_edit(ui, "Ende:", &mut opts.end_color);
                        changed |= color_edit(ui, "Steuerpunkt:", &mut opts.control_color);
                    });

                    // ── Linie ───────────────────────────────────────
                    ui.collapsing("Linie", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Breite:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.line_thickness)
                                        .range(0.5..=30.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Farbe:", &mut opts.line_color);
                        ui.horizontal(|ui| {
                            ui.label("Sample-Radius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.sample_point_radius)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Sample-Farbe:", &mut opts.sample_point_color);
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Editor für einen Punkt [x, y].
fn point_edit(ui: &mut egui::Ui, label: &str, point: &mut [f32; 2]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed |= ui
            .add(egui::DragValue::new(&mut point[0]).prefix("x: ").speed(1.0))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut point[1]).prefix("y: ").speed(1.0))
            .changed();
    });
    changed
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = from_color32(c);
            changed = true;
        }
    });
    changed
}
