//! Application State — zentrale Datenhaltung.

use super::interaction::InteractionController;
use super::CommandLog;
use crate::core::{CurveModel, TessellationCache};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kurvenmodell (Steuerpunkte, Sample-Anzahl, Polylinie)
    pub curve: CurveModel,
    /// Pointer-/Scroll-Interaktion inkl. Drag-Zustand
    pub interaction: InteractionController,
    /// Cache der tessellierten Segmente (nur im Quad-Modus genutzt)
    pub tessellation: TessellationCache,
    /// Laufzeit-Optionen (Farben, Radien, Breiten)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Zielpfad für geänderte Optionen (`None` = nicht persistieren)
    pub config_path: Option<PathBuf>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State, Kurve und Interaktion aus den Optionen initialisiert
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            curve: CurveModel::new(options.initial_controls(), options.initial_sample_count()),
            interaction: InteractionController::new(options.hit_radius),
            tessellation: TessellationCache::new(),
            options,
            command_log: CommandLog::new(),
            show_options_dialog: false,
            config_path: None,
            should_exit: false,
        }
    }

    /// Anzahl der Liniensegmente der aktuellen Polylinie (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.curve.polyline().len().saturating_sub(1)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
