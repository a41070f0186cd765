//! Zeichnen der Render-Szene über eine schmale Painter-Schnittstelle.
//!
//! `paint_scene` kennt nur `ScenePainter`; die egui-Anbindung steckt in
//! `EguiScenePainter`. Reihenfolge: Linie, Sample-Punkte, Handles.

mod egui_painter;

pub use crate::shared::{LineRenderMode, RenderScene};
pub use egui_painter::EguiScenePainter;
pub use egui_painter::{from_color32, to_color32};

use crate::core::RenderSegment;
use glam::Vec2;

/// Zeichen-Primitive, die der Editor vom Renderer erwartet.
pub trait ScenePainter {
    /// Gefüllter Kreis (Handles, Sample-Punkte).
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Native Linie mit Breite durch alle Punkte.
    fn draw_polyline(&mut self, points: &[Vec2], thickness: f32, color: [f32; 4]);

    /// Gefülltes, gedrehtes Rechteck eines tessellierten Segments.
    fn draw_filled_quad(&mut self, segment: &RenderSegment, color: [f32; 4]);
}

/// Zeichnet die komplette Szene.
pub fn paint_scene(scene: &RenderScene<'_>, painter: &mut impl ScenePainter) {
    let opts = scene.options;

    match scene.line_mode() {
        LineRenderMode::NativeStrip => {
            if scene.polyline.len() >= 2 {
                painter.draw_polyline(scene.polyline, opts.line_thickness, opts.line_color);
            }
        }
        LineRenderMode::TessellatedQuads => {
            for segment in scene.segments {
                painter.draw_filled_quad(segment, opts.line_color);
            }
        }
    }

    if opts.show_sample_points {
        for &point in scene.interior_samples() {
            painter.draw_filled_circle(point, opts.sample_point_radius, opts.sample_point_color);
        }
    }

    for (target, pos) in scene.handles {
        painter.draw_filled_circle(pos, opts.handle_radius, scene.handle_color(target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};

    #[derive(Debug, PartialEq)]
    enum Call {
        Circle(Vec2, f32),
        Polyline(usize),
        Quad(Vec2),
    }

    #[derive(Default)]
    struct RecordingPainter {
        calls: Vec<Call>,
    }

    impl ScenePainter for RecordingPainter {
        fn draw_filled_circle(&mut self, center: Vec2, radius: f32, _color: [f32; 4]) {
            self.calls.push(Call::Circle(center, radius));
        }

        fn draw_polyline(&mut self, points: &[Vec2], _thickness: f32, _color: [f32; 4]) {
            self.calls.push(Call::Polyline(points.len()));
        }

        fn draw_filled_quad(&mut self, segment: &RenderSegment, _color: [f32; 4]) {
            self.calls.push(Call::Quad(segment.origin));
        }
    }

    #[test]
    fn test_native_mode_draws_one_polyline_then_handles() {
        let mut state = AppState::new();
        let scene = build_render_scene(&mut state);
        let mut painter = RecordingPainter::default();

        paint_scene(&scene, &mut painter);

        assert_eq!(painter.calls.len(), 4);
        assert_eq!(painter.calls[0], Call::Polyline(100));
        assert_eq!(painter.calls[1], Call::Circle(Vec2::new(50.0, 50.0), 10.0));
        assert_eq!(painter.calls[2], Call::Circle(Vec2::new(250.0, 250.0), 10.0));
        assert_eq!(painter.calls[3], Call::Circle(Vec2::new(150.0, 20.0), 10.0));
    }

    #[test]
    fn test_quad_mode_with_sample_points() {
        let mut state = AppState::new();
        state.options.line_mode = LineRenderMode::TessellatedQuads;
        state.options.show_sample_points = true;
        state
            .curve
            .set_sample_count(crate::core::SampleCount::new(5));
        let scene = build_render_scene(&mut state);
        let mut painter = RecordingPainter::default();

        paint_scene(&scene, &mut painter);

        let quads = painter
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Quad(_)))
            .count();
        let circles = painter
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Circle(..)))
            .count();
        // 4 Segmente, 3 innere Samples + 3 Handles
        assert_eq!(quads, 4);
        assert_eq!(circles, 6);
        assert_eq!(painter.calls[0], Call::Quad(Vec2::new(50.0, 50.0)));
    }
}
