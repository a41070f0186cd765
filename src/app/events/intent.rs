use crate::core::ControlSet;
use crate::shared::{EditorOptions, LineRenderMode};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste im Canvas gedrückt (Canvas-Koordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Pointer im Canvas bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Mausrad gedreht (nur das Vorzeichen zählt)
    Scrolled { delta: f32 },
    /// Kurve programmatisch platzieren
    CurvePlacementRequested {
        controls: ControlSet,
        sample_count: usize,
    },
    /// Kurve auf konfigurierte Startwerte zurücksetzen
    ResetCurveRequested,
    /// Zeichenstrategie der Linie wechseln
    LineRenderModeChanged { mode: LineRenderMode },
    /// Sample-Punkt-Marker ein-/ausblenden
    SamplePointsToggled { visible: bool },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
