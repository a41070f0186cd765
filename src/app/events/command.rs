use crate::core::{ControlSet, SampleCount};
use crate::shared::{EditorOptions, LineRenderMode};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag auf dem Handle unter `pos` beginnen (falls getroffen)
    BeginDrag { pos: glam::Vec2 },
    /// Gezogenes Handle auf `pos` setzen
    UpdateDrag { pos: glam::Vec2 },
    /// Drag beenden
    EndDrag,
    /// Sample-Anzahl per Scroll-Richtung anpassen
    AdjustSampleCount { delta: f32 },
    /// Steuerpunkte und Sample-Anzahl ersetzen
    PlaceCurve {
        controls: ControlSet,
        sample_count: SampleCount,
    },
    /// Zeichenstrategie setzen
    SetLineRenderMode { mode: LineRenderMode },
    /// Sample-Punkt-Marker setzen
    SetSamplePointsVisible { visible: bool },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen (und persistieren, falls Pfad gesetzt)
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
