//! Canvas-Input-Handling: rohe egui-Events → AppIntent.
//!
//! Positionen werden in Canvas-Koordinaten umgerechnet (Bildschirmposition
//! minus linke obere Ecke des Canvas).

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand für den Canvas
#[derive(Debug, Default)]
pub struct InputState {
    /// Primäre Taste wurde im Canvas gedrückt und noch nicht losgelassen
    primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die Canvas-Events dieses Frames und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let events = ui.input(|i| i.events.clone());
        self.map_events(&events, response.rect, response.hovered())
    }

    /// Übersetzt egui-Events in Intents, in Eingangsreihenfolge.
    pub(crate) fn map_events(
        &mut self,
        events: &[egui::Event],
        canvas: egui::Rect,
        hovered: bool,
    ) -> Vec<AppIntent> {
        let mut intents = Vec::new();

        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } if canvas.contains(*pos) => {
                    self.primary_down = true;
                    intents.push(AppIntent::PointerPressed {
                        pos: canvas_local(*pos, canvas),
                    });
                }
                egui::Event::PointerButton {
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    self.primary_down = false;
                    intents.push(AppIntent::PointerReleased);
                }
                egui::Event::PointerMoved(pos) => {
                    intents.push(AppIntent::PointerMoved {
                        pos: canvas_local(*pos, canvas),
                    });
                }
                egui::Event::PointerGone if self.primary_down => {
                    self.primary_down = false;
                    intents.push(AppIntent::PointerReleased);
                }
                egui::Event::MouseWheel { delta, .. } if hovered && delta.y != 0.0 => {
                    intents.push(AppIntent::Scrolled { delta: delta.y });
                }
                _ => {}
            }
        }

        intents
    }
}

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
pub(crate) fn canvas_local(pos: egui::Pos2, canvas: egui::Rect) -> Vec2 {
    let local = pos - canvas.min;
    Vec2::new(local.x, local.y)
}
