//! Pointer-Interaktion: Hit-Test, Drag-Lifecycle und Scroll → Kurvenmutation.
//!
//! Zustandsmaschine: `Idle` → `Dragging(target)` bei Pointer-Down auf einem Handle,
//! `Dragging` → `Idle` bei Pointer-Up. Ein zweites Pointer-Down während eines
//! Drags wird ignoriert (exklusiver Drag bis zum Loslassen).

use crate::core::{ControlSet, CurveModel, DragTarget};
use glam::Vec2;

/// Drag-Zustand des Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Handle wird gezogen (nie `DragTarget::None`)
    Dragging(DragTarget),
}

impl DragState {
    /// True während eines Drags.
    pub fn is_active(self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Gezogenes Handle, `DragTarget::None` im Idle.
    pub fn target(self) -> DragTarget {
        match self {
            DragState::Idle => DragTarget::None,
            DragState::Dragging(target) => target,
        }
    }
}

/// Übersetzt Pointer- und Scroll-Ereignisse in Mutationen am `CurveModel`.
#[derive(Debug, Clone)]
pub struct InteractionController {
    drag: DragState,
    hit_radius: f32,
}

impl InteractionController {
    /// Erstellt einen Controller im Idle-Zustand. Negative Radien werden auf 0 geklemmt.
    pub fn new(hit_radius: f32) -> Self {
        Self {
            drag: DragState::Idle,
            hit_radius: hit_radius.max(0.0),
        }
    }

    /// Aktueller Drag-Zustand.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Hit-Radius der Handles.
    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    /// Übernimmt den Hit-Radius (z.B. nach Optionen-Änderung), mindestens 0.
    pub fn configure(&mut self, hit_radius: f32) {
        self.hit_radius = hit_radius.max(0.0);
    }

    /// Welches Handle enthält `pos`?
    ///
    /// Kreisförmiger Hit-Radius um jedes Handle. Überlappen sich Handles,
    /// gewinnt das erste in der Reihenfolge Start, End, Control.
    pub fn hit_test(&self, controls: &ControlSet, pos: Vec2) -> DragTarget {
        let radius_sq = self.hit_radius * self.hit_radius;
        DragTarget::PRIORITY
            .into_iter()
            .find(|&target| {
                controls
                    .get(target)
                    .is_some_and(|handle| handle.distance_squared(pos) <= radius_sq)
            })
            .unwrap_or(DragTarget::None)
    }

    /// Startet einen Drag, wenn `pos` ein Handle trifft und noch kein Drag läuft.
    ///
    /// Gibt das neu gegriffene Handle zurück (`DragTarget::None` wenn nichts passiert ist).
    pub fn on_pointer_down(&mut self, controls: &ControlSet, pos: Vec2) -> DragTarget {
        if self.drag.is_active() {
            return DragTarget::None;
        }
        let target = self.hit_test(controls, pos);
        if target != DragTarget::None {
            self.drag = DragState::Dragging(target);
            log::debug!("Drag gestartet: {} bei ({:.1}, {:.1})", target.label(), pos.x, pos.y);
        }
        target
    }

    /// Setzt das gezogene Handle absolut auf `pos` (kein Offset zum Greifpunkt).
    ///
    /// Gibt `true` zurück, wenn sich ein Punkt geändert hat.
    pub fn on_pointer_move(&self, curve: &mut CurveModel, pos: Vec2) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::Dragging(target) => curve.set_point(target, pos),
        }
    }

    /// Beendet einen laufenden Drag. Gibt das losgelassene Handle zurück.
    pub fn on_pointer_up(&mut self) -> DragTarget {
        let released = self.drag.target();
        if released != DragTarget::None {
            log::debug!("Drag beendet: {}", released.label());
        }
        self.drag = DragState::Idle;
        released
    }

    /// Scroll > 0 erhöht, Scroll < 0 verringert die Sample-Anzahl um genau 1 (Untergrenze 2).
    ///
    /// Gibt `true` zurück, wenn sich die Anzahl geändert hat.
    pub fn on_scroll(&self, curve: &mut CurveModel, delta: f32) -> bool {
        let current = curve.sample_count();
        let next = if delta > 0.0 {
            current.increased(1)
        } else if delta < 0.0 {
            current.decreased(1)
        } else {
            return false;
        };
        let changed = curve.set_sample_count(next);
        if changed {
            log::debug!("Sample-Anzahl: {} → {}", current.get(), next.get());
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SampleCount;

    fn demo_curve() -> CurveModel {
        CurveModel::new(
            ControlSet::new(
                Vec2::new(50.0, 50.0),
                Vec2::new(250.0, 250.0),
                Vec2::new(150.0, 20.0),
            ),
            SampleCount::new(100),
        )
    }

    #[test]
    fn test_starts_idle() {
        let ctrl = InteractionController::new(10.0);
        assert_eq!(ctrl.drag_state(), DragState::Idle);
        assert!(!ctrl.drag_state().is_active());
        assert_eq!(ctrl.drag_state().target(), DragTarget::None);
    }

    #[test]
    fn test_hit_test_center_and_miss() {
        let ctrl = InteractionController::new(10.0);
        let curve = demo_curve();
        let controls = curve.controls();

        assert_eq!(ctrl.hit_test(controls, controls.start), DragTarget::Start);
        assert_eq!(ctrl.hit_test(controls, controls.end), DragTarget::End);
        assert_eq!(ctrl.hit_test(controls, controls.control), DragTarget::Control);
        assert_eq!(ctrl.hit_test(controls, Vec2::new(500.0, 500.0)), DragTarget::None);
        // Knapp innerhalb / außerhalb des Radius
        assert_eq!(ctrl.hit_test(controls, Vec2::new(59.0, 50.0)), DragTarget::Start);
        assert_eq!(ctrl.hit_test(controls, Vec2::new(61.0, 50.0)), DragTarget::None);
    }

    #[test]
    fn test_hit_test_overlap_priority() {
        let ctrl = InteractionController::new(10.0);
        let p = Vec2::new(100.0, 100.0);

        let all_same = ControlSet::new(p, p, p);
        assert_eq!(ctrl.hit_test(&all_same, p), DragTarget::Start);

        let end_and_control = ControlSet::new(Vec2::ZERO, p, p + Vec2::new(3.0, 0.0));
        assert_eq!(ctrl.hit_test(&end_and_control, p + Vec2::X), DragTarget::End);
    }

    #[test]
    fn test_pointer_down_outside_does_not_mutate() {
        let mut ctrl = InteractionController::new(10.0);
        let mut curve = demo_curve();
        let before = *curve.controls();

        let controls = *curve.controls();
        assert_eq!(ctrl.on_pointer_down(&controls, Vec2::new(400.0, 10.0)), DragTarget::None);
        assert!(!ctrl.on_pointer_move(&mut curve, Vec2::new(1.0, 1.0)));
        assert_eq!(*curve.controls(), before);
    }

    #[test]
    fn test_drag_moves_absolute_and_stops_on_release() {
        let mut ctrl = InteractionController::new(10.0);
        let mut curve = demo_curve();

        // Greifpunkt leicht neben dem Zentrum: Handle springt trotzdem exakt auf den Pointer
        let controls = *curve.controls();
        ctrl.on_pointer_down(&controls, Vec2::new(153.0, 22.0));
        assert_eq!(ctrl.drag_state(), DragState::Dragging(DragTarget::Control));

        let p = Vec2::new(300.0, 120.0);
        assert!(ctrl.on_pointer_move(&mut curve, p));
        assert_eq!(curve.controls().control, p);

        assert_eq!(ctrl.on_pointer_up(), DragTarget::Control);
        assert!(!ctrl.on_pointer_move(&mut curve, Vec2::new(10.0, 10.0)));
        assert_eq!(curve.controls().control, p);
    }

    #[test]
    fn test_pointer_down_while_dragging_is_ignored() {
        let mut ctrl = InteractionController::new(10.0);
        let curve = demo_curve();
        let controls = *curve.controls();

        ctrl.on_pointer_down(&controls, controls.start);
        assert_eq!(ctrl.on_pointer_down(&controls, controls.end), DragTarget::None);
        assert_eq!(ctrl.drag_state().target(), DragTarget::Start);
    }

    #[test]
    fn test_pointer_up_when_idle_is_harmless() {
        let mut ctrl = InteractionController::new(10.0);
        assert_eq!(ctrl.on_pointer_up(), DragTarget::None);
        assert_eq!(ctrl.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_scroll_adjusts_and_clamps() {
        let ctrl = InteractionController::new(10.0);
        let mut curve = CurveModel::new(*demo_curve().controls(), SampleCount::new(3));

        assert!(ctrl.on_scroll(&mut curve, 1.0));
        assert_eq!(curve.sample_count().get(), 4);
        assert!(!ctrl.on_scroll(&mut curve, 0.0));

        for _ in 0..10 {
            ctrl.on_scroll(&mut curve, -3.5);
        }
        assert_eq!(curve.sample_count().get(), 2);
        curve.refresh();
        assert_eq!(curve.polyline().len(), 2);
    }

    #[test]
    fn test_scroll_step_is_always_one() {
        let ctrl = InteractionController::new(10.0);
        let mut curve = demo_curve();

        ctrl.on_scroll(&mut curve, 120.0);
        assert_eq!(curve.sample_count().get(), 101);
        ctrl.on_scroll(&mut curve, -0.25);
        assert_eq!(curve.sample_count().get(), 100);
    }

    #[test]
    fn test_negative_hit_radius_is_clamped() {
        let mut ctrl = InteractionController::new(-10.0);
        let curve = demo_curve();
        let controls = curve.controls();

        assert_eq!(ctrl.hit_radius(), 0.0);
        assert_eq!(ctrl.hit_test(controls, Vec2::new(55.0, 50.0)), DragTarget::None);
        // Exakt auf dem Zentrum trifft auch Radius 0
        assert_eq!(ctrl.hit_test(controls, controls.start), DragTarget::Start);

        ctrl.configure(-3.0);
        assert_eq!(ctrl.hit_radius(), 0.0);
        ctrl.configure(12.0);
        assert_eq!(ctrl.hit_radius(), 12.0);
    }
}
