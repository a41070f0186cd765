//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use super::LineRenderMode;
use crate::core::{DragTarget, RenderSegment};
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderScene<'a> {
    /// Abgetastete Kurve (Canvas-Koordinaten)
    pub polyline: &'a [Vec2],
    /// Tessellierte Segmente (leer bei `LineRenderMode::NativeStrip`)
    pub segments: &'a [RenderSegment],
    /// Handles in Hit-Test-Reihenfolge
    pub handles: [(DragTarget, Vec2); 3],
    /// Laufzeit-Optionen für Farben, Radien, Breiten
    pub options: &'a EditorOptions,
}

impl RenderScene<'_> {
    /// Zeichenstrategie der Linie.
    pub fn line_mode(&self) -> LineRenderMode {
        self.options.line_mode
    }

    /// Farbe eines Handles laut Optionen.
    pub fn handle_color(&self, target: DragTarget) -> [f32; 4] {
        match target {
            DragTarget::Start => self.options.start_color,
            DragTarget::End => self.options.end_color,
            DragTarget::Control | DragTarget::None => self.options.control_color,
        }
    }

    /// Innere Sample-Punkte (ohne Start und Ende).
    pub fn interior_samples(&self) -> &[Vec2] {
        match self.polyline.len() {
            0..=2 => &[],
            n => &self.polyline[1..n - 1],
        }
    }
}
