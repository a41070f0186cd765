//! Die drei Steuerpunkte einer quadratischen Bézier-Kurve und deren Handle-Zuordnung.

use glam::Vec2;

/// Welcher Punkt der Kurve ist gemeint (Drag-Ziel, Hit-Test-Ergebnis)?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragTarget {
    /// Kein Punkt getroffen / kein Drag aktiv
    #[default]
    None,
    /// Startpunkt P0
    Start,
    /// Endpunkt P2
    End,
    /// Krümmungs-Steuerpunkt P1
    Control,
}

impl DragTarget {
    /// Feste Hit-Test-Reihenfolge bei überlappenden Handles: Start vor End vor Control.
    pub const PRIORITY: [DragTarget; 3] = [DragTarget::Start, DragTarget::End, DragTarget::Control];

    /// Anzeigename für Status-Bar und Logging.
    pub fn label(self) -> &'static str {
        match self {
            DragTarget::None => "keiner",
            DragTarget::Start => "Start",
            DragTarget::End => "End",
            DragTarget::Control => "Control",
        }
    }
}

/// Die drei autoritativen Punkte der Kurve.
///
/// Keine Ordnungs-Invariante: kollineare oder deckungsgleiche Punkte sind gültig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSet {
    /// Startpunkt (t = 0)
    pub start: Vec2,
    /// Endpunkt (t = 1)
    pub end: Vec2,
    /// Steuerpunkt, zieht die Kurve zu sich
    pub control: Vec2,
}

impl ControlSet {
    /// Erstellt ein neues Punkt-Tripel.
    pub fn new(start: Vec2, end: Vec2, control: Vec2) -> Self {
        Self {
            start,
            end,
            control,
        }
    }

    /// Position des angegebenen Handles (`None` für `DragTarget::None`).
    pub fn get(&self, target: DragTarget) -> Option<Vec2> {
        match target {
            DragTarget::Start => Some(self.start),
            DragTarget::End => Some(self.end),
            DragTarget::Control => Some(self.control),
            DragTarget::None => None,
        }
    }

    /// Überschreibt den Punkt des Handles. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn set(&mut self, target: DragTarget, pos: Vec2) -> bool {
        let slot = match target {
            DragTarget::Start => &mut self.start,
            DragTarget::End => &mut self.end,
            DragTarget::Control => &mut self.control,
            DragTarget::None => return false,
        };
        if *slot == pos {
            return false;
        }
        *slot = pos;
        true
    }

    /// Alle Handles in Hit-Test-Reihenfolge.
    pub fn handles(&self) -> [(DragTarget, Vec2); 3] {
        [
            (DragTarget::Start, self.start),
            (DragTarget::End, self.end),
            (DragTarget::Control, self.control),
        ]
    }

    /// True, wenn alle Koordinaten endlich sind (kein NaN / ±∞).
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.control.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_dispatches_on_target() {
        let mut set = ControlSet::new(Vec2::ZERO, Vec2::ONE, Vec2::new(2.0, 2.0));

        assert!(set.set(DragTarget::Control, Vec2::new(5.0, 6.0)));
        assert_eq!(set.control, Vec2::new(5.0, 6.0));
        assert_eq!(set.start, Vec2::ZERO);
        assert_eq!(set.end, Vec2::ONE);
    }

    #[test]
    fn test_set_none_is_noop() {
        let mut set = ControlSet::new(Vec2::ZERO, Vec2::ONE, Vec2::new(2.0, 2.0));
        let before = set;

        assert!(!set.set(DragTarget::None, Vec2::new(9.0, 9.0)));
        assert_eq!(set, before);
    }

    #[test]
    fn test_set_same_position_reports_unchanged() {
        let mut set = ControlSet::new(Vec2::ZERO, Vec2::ONE, Vec2::new(2.0, 2.0));
        assert!(!set.set(DragTarget::End, Vec2::ONE));
    }

    #[test]
    fn test_is_finite_detects_nan() {
        let set = ControlSet::new(Vec2::new(f32::NAN, 0.0), Vec2::ONE, Vec2::ZERO);
        assert!(!set.is_finite());
    }

    #[test]
    fn test_labels_are_plain_text() {
        assert_eq!(DragTarget::None.label(), "keiner");
        assert!(DragTarget::PRIORITY
            .iter()
            .chain([DragTarget::None].iter())
            .all(|t| t.label().is_ascii()));
    }
}
