//! `ScenePainter`-Implementierung auf Basis von `egui::Painter`.

use super::ScenePainter;
use crate::core::RenderSegment;
use glam::Vec2;

/// Zeichnet in einen egui-Painter; Canvas-Koordinaten werden um `origin` verschoben.
pub struct EguiScenePainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiScenePainter<'a> {
    /// Erstellt einen Painter für den Canvas mit linker oberer Ecke `origin`.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

/// Wandelt eine RGBA-Farbe [0..1] in `Color32` um.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Gegenstück zu `to_color32`: `Color32` (intern premultiplied) zurück nach RGBA [0..1].
pub fn from_color32(color: egui::Color32) -> [f32; 4] {
    color
        .to_srgba_unmultiplied()
        .map(|channel| channel as f32 / 255.0)
}

impl ScenePainter for EguiScenePainter<'_> {
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn draw_polyline(&mut self, points: &[Vec2], thickness: f32, color: [f32; 4]) {
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter.add(egui::Shape::line(
            screen,
            egui::Stroke::new(thickness, to_color32(color)),
        ));
    }

    fn draw_filled_quad(&mut self, segment: &RenderSegment, color: [f32; 4]) {
        if segment.length <= 0.0 {
            return;
        }
        let corners = segment.corners().map(|c| self.to_screen(c)).to_vec();
        self.painter.add(egui::Shape::convex_polygon(
            corners,
            to_color32(color),
            egui::Stroke::NONE,
        ));
    }
}
