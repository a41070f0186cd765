//! Kurvenmodell: Steuerpunkte, Sample-Anzahl und die daraus abgetastete Polylinie.
//!
//! `sample` ist eine reine Funktion der drei Punkte und der Sample-Anzahl.
//! `CurveModel` hält den autoritativen Zustand und cached die Polylinie;
//! Mutationen setzen ein Dirty-Flag, `refresh` tastet nur bei Bedarf neu ab.

use super::control_set::{ControlSet, DragTarget};
use glam::Vec2;

/// Anzahl der Abtastpunkte entlang der Kurve, nie kleiner als 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleCount(usize);

impl SampleCount {
    /// Untergrenze: bei weniger als 2 Samples ist die Schrittweite 1/(n-1) undefiniert.
    pub const MIN: usize = 2;

    /// Erstellt eine Sample-Anzahl, Werte unter `MIN` werden still angehoben.
    pub fn new(count: usize) -> Self {
        Self(count.max(Self::MIN))
    }

    /// Roher Zahlenwert.
    pub fn get(self) -> usize {
        self.0
    }

    /// Um `step` erhöht (sättigend).
    pub fn increased(self, step: usize) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    /// Um `step` verringert, an `MIN` geklemmt.
    pub fn decreased(self, step: usize) -> Self {
        Self::new(self.0.saturating_sub(step))
    }
}

impl Default for SampleCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<usize> for SampleCount {
    fn from(count: usize) -> Self {
        Self::new(count)
    }
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Tastet die Kurve an `sample_count` gleichverteilten Parameterwerten ab.
///
/// t = i / (n - 1) für i in [0, n). Der erste und letzte Punkt sind exakt
/// Start- bzw. Endpunkt (nicht über die Formel gerundet).
pub fn sample(controls: &ControlSet, sample_count: SampleCount) -> Vec<Vec2> {
    let n = sample_count.get();
    let last = n - 1;
    let denom = last as f32;

    (0..n)
        .map(|i| {
            if i == 0 {
                controls.start
            } else if i == last {
                controls.end
            } else {
                let t = i as f32 / denom;
                quadratic_bezier(controls.start, controls.control, controls.end, t)
            }
        })
        .collect()
}

/// Autoritativer Kurvenzustand mit gecachter Polylinie.
#[derive(Debug, Clone)]
pub struct CurveModel {
    controls: ControlSet,
    sample_count: SampleCount,
    polyline: Vec<Vec2>,
    /// Zähler, der bei jedem Neu-Abtasten steigt (Cache-Schlüssel für Tessellierung)
    revision: u64,
    dirty: bool,
}

impl CurveModel {
    /// Erstellt ein Modell und tastet sofort ab.
    pub fn new(controls: ControlSet, sample_count: SampleCount) -> Self {
        let polyline = sample(&controls, sample_count);
        Self {
            controls,
            sample_count,
            polyline,
            revision: 0,
            dirty: false,
        }
    }

    /// Aktuelle Steuerpunkte.
    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    /// Aktuelle Sample-Anzahl.
    pub fn sample_count(&self) -> SampleCount {
        self.sample_count
    }

    /// Polylinie nach dem letzten `update`/`refresh`.
    pub fn polyline(&self) -> &[Vec2] {
        &self.polyline
    }

    /// Revision der Polylinie; ändert sich bei jedem Neu-Abtasten.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True, wenn seit dem letzten Abtasten Punkte oder Sample-Anzahl geändert wurden.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Ersetzt Steuerpunkte und Sample-Anzahl und tastet sofort neu ab.
    ///
    /// Alles-oder-nichts: Punkte mit NaN/∞ werden abgelehnt, der vorherige
    /// Zustand bleibt erhalten. Die Sample-Anzahl ist durch `SampleCount` bereits geklemmt.
    pub fn update(
        &mut self,
        controls: ControlSet,
        sample_count: SampleCount,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            controls.is_finite(),
            "Steuerpunkte enthalten nicht-endliche Koordinaten: {:?}",
            controls
        );
        self.controls = controls;
        self.sample_count = sample_count;
        self.resample();
        Ok(())
    }

    /// Verschiebt einen einzelnen Punkt (markiert dirty, tastet noch nicht ab).
    pub fn set_point(&mut self, target: DragTarget, pos: Vec2) -> bool {
        let changed = self.controls.set(target, pos);
        self.dirty |= changed;
        changed
    }

    /// Setzt die Sample-Anzahl (markiert dirty bei Änderung).
    pub fn set_sample_count(&mut self, sample_count: SampleCount) -> bool {
        if self.sample_count == sample_count {
            return false;
        }
        self.sample_count = sample_count;
        self.dirty = true;
        true
    }

    /// Tastet neu ab, falls seit dem letzten Mal etwas geändert wurde.
    /// Gibt `true` zurück, wenn neu abgetastet wurde.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.resample();
        true
    }

    fn resample(&mut self) {
        self.polyline = sample(&self.controls, self.sample_count);
        self.revision = self.revision.wrapping_add(1);
        self.dirty = false;
    }
}
