//! Zerlegung einer Polylinie in orientierte Rechtecke (ein Quad pro Segment).
//!
//! Wird nur gebraucht, wenn der Renderer keine native Linie mit Breite zeichnet.

use glam::Vec2;

/// Ein gedrehtes Rechteck zwischen zwei aufeinanderfolgenden Polylinien-Punkten.
///
/// Unrotiert liegt die lange Achse entlang +x, der vertikale Ursprung auf halber
/// Breite: der Strich ist auf der Linie zentriert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSegment {
    /// Startpunkt des Segments
    pub origin: Vec2,
    /// Euklidische Länge bis zum nächsten Punkt
    pub length: f32,
    /// Drehwinkel in Grad, atan2(dy, dx)
    pub angle_degrees: f32,
    /// Strichbreite
    pub thickness: f32,
}

impl RenderSegment {
    /// Erstellt das Segment p1 → p2. Bei p1 == p2: Länge 0, Winkel 0.
    pub fn between(p1: Vec2, p2: Vec2, thickness: f32) -> Self {
        let delta = p2 - p1;
        Self {
            origin: p1,
            length: delta.length(),
            // atan2(0, 0) == 0
            angle_degrees: delta.y.atan2(delta.x).to_degrees(),
            thickness,
        }
    }

    /// Einheitsvektor entlang der Segmentachse.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle_degrees.to_radians())
    }

    /// Die vier Ecken des gedrehten, zentrierten Rechtecks.
    ///
    /// Reihenfolge: Start links, Start rechts, Ende rechts, Ende links
    /// (konvex, für `Shape::convex_polygon`).
    pub fn corners(&self) -> [Vec2; 4] {
        let dir = self.direction();
        let perp = Vec2::new(-dir.y, dir.x) * (self.thickness * 0.5);
        let end = self.origin + dir * self.length;
        [
            self.origin + perp,
            self.origin - perp,
            end - perp,
            end + perp,
        ]
    }
}

/// Zerlegt die Polylinie in `polyline.len() - 1` Segmente.
///
/// Weniger als zwei Punkte ergeben eine leere Liste.
pub fn tessellate(polyline: &[Vec2], thickness: f32) -> Vec<RenderSegment> {
    polyline
        .windows(2)
        .map(|pair| RenderSegment::between(pair[0], pair[1], thickness))
        .collect()
}

/// Cached die Segmente einer Polylinie-Revision.
///
/// Neu berechnet wird nur, wenn sich Revision oder Strichbreite geändert haben.
#[derive(Debug, Default)]
pub struct TessellationCache {
    key: Option<(u64, u32)>,
    segments: Vec<RenderSegment>,
}

impl TessellationCache {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert die Segmente, tesselliert bei Bedarf neu.
    pub fn segments(&mut self, revision: u64, polyline: &[Vec2], thickness: f32) -> &[RenderSegment] {
        let key = (revision, thickness.to_bits());
        if self.key != Some(key) {
            self.segments = tessellate(polyline, thickness);
            self.key = Some(key);
        }
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tessellate_empty_and_single_point() {
        assert!(tessellate(&[], 5.0).is_empty());
        assert!(tessellate(&[Vec2::new(1.0, 2.0)], 5.0).is_empty());
    }

    #[test]
    fn test_tessellate_zero_length_segment() {
        let p = Vec2::new(4.0, 4.0);
        let segments = tessellate(&[p, p], 5.0);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].origin, p);
        assert_eq!(segments[0].length, 0.0);
        assert_eq!(segments[0].angle_degrees, 0.0);
        assert_eq!(segments[0].thickness, 5.0);
    }

    #[test]
    fn test_tessellate_length_and_angle() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(3.0, 10.0),
            Vec2::new(-1.0, 10.0),
        ];
        let segments = tessellate(&points, 2.0);

        assert_eq!(segments.len(), 3);
        assert_abs_diff_eq!(segments[0].length, 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(segments[0].angle_degrees, 53.130_1, epsilon = 1e-3);
        assert_abs_diff_eq!(segments[1].angle_degrees, 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(segments[2].angle_degrees, 180.0, epsilon = 1e-4);
        assert_eq!(segments[2].origin, Vec2::new(3.0, 10.0));
    }

    #[test]
    fn test_corners_are_centered_on_line() {
        let segment = RenderSegment::between(Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0), 4.0);
        let [a, b, c, d] = segment.corners();

        assert_abs_diff_eq!(a.x, 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(a.y, 2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(b.y, -2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.x, 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.y, -2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(d.y, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cache_reuses_until_revision_changes() {
        let mut cache = TessellationCache::new();
        let line = [Vec2::ZERO, Vec2::X, Vec2::new(2.0, 0.0)];

        assert_eq!(cache.segments(1, &line, 5.0).len(), 2);
        // Gleiche Revision, andere Daten: Cache bleibt gültig
        assert_eq!(cache.segments(1, &line[..2], 5.0).len(), 2);
        assert_eq!(cache.segments(2, &line[..2], 5.0).len(), 1);
        assert_eq!(cache.segments(2, &line[..2], 3.0)[0].thickness, 3.0);
    }
}
