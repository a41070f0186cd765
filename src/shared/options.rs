//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::LineRenderMode;
use crate::core::{ControlSet, SampleCount};
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Start-Fenstergröße in Pixeln [Breite, Höhe].
pub const WINDOW_SIZE: [f32; 2] = [720.0, 1080.0];

// ── Kurve ───────────────────────────────────────────────────────────

/// Standard-Startpunkt (Canvas-Koordinaten).
pub const INITIAL_START: [f32; 2] = [50.0, 50.0];
/// Standard-Endpunkt.
pub const INITIAL_END: [f32; 2] = [250.0, 250.0];
/// Standard-Steuerpunkt.
pub const INITIAL_CONTROL: [f32; 2] = [150.0, 20.0];
/// Standard-Anzahl der Abtastpunkte.
pub const INITIAL_SAMPLE_COUNT: usize = 100;
/// Untergrenze der Abtastpunkte.
pub const MIN_SAMPLE_COUNT: usize = SampleCount::MIN;

// ── Handles ─────────────────────────────────────────────────────────

/// Zeichenradius der Handles in Pixeln.
pub const HANDLE_RADIUS: f32 = 10.0;
/// Hit-Radius der Handles in Pixeln.
pub const HIT_RADIUS: f32 = 10.0;
/// Farbe Start-Handle (RGBA: Gelb).
pub const START_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Farbe End-Handle (RGBA: Blau).
pub const END_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe Steuerpunkt-Handle (RGBA: Grün).
pub const CONTROL_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

// ── Linie ───────────────────────────────────────────────────────────

/// Linienstärke in Pixeln.
pub const LINE_THICKNESS: f32 = 5.0;
/// Linienfarbe (RGBA: Weiß).
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Radius der Sample-Punkt-Marker.
pub const SAMPLE_POINT_RADIUS: f32 = 4.0;
/// Farbe der Sample-Punkt-Marker (RGBA: Rot).
pub const SAMPLE_POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Hintergrundfarbe des Canvas (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Startpunkt beim Programmstart / Zurücksetzen
    pub initial_start: [f32; 2],
    /// Endpunkt beim Programmstart / Zurücksetzen
    pub initial_end: [f32; 2],
    /// Steuerpunkt beim Programmstart / Zurücksetzen
    pub initial_control: [f32; 2],
    /// Anzahl Abtastpunkte beim Programmstart (wird auf ≥ 2 geklemmt)
    pub initial_sample_count: usize,

    // ── Handles ─────────────────────────────────────────────────
    /// Zeichenradius der Handles
    pub handle_radius: f32,
    /// Hit-Radius für Pointer-Down
    pub hit_radius: f32,
    /// Farbe Start-Handle
    pub start_color: [f32; 4],
    /// Farbe End-Handle
    pub end_color: [f32; 4],
    /// Farbe Steuerpunkt-Handle
    pub control_color: [f32; 4],

    // ── Linie ───────────────────────────────────────────────────
    /// Linienstärke
    pub line_thickness: f32,
    /// Linienfarbe
    pub line_color: [f32; 4],
    /// Zeichenstrategie (native Linie oder Quads)
    #[serde(default)]
    pub line_mode: LineRenderMode,
    /// Sample-Punkte als Kreise einblenden
    #[serde(default)]
    pub show_sample_points: bool,
    /// Radius der Sample-Punkt-Marker
    pub sample_point_radius: f32,
    /// Farbe der Sample-Punkt-Marker
    pub sample_point_color: [f32; 4],
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_start: INITIAL_START,
            initial_end: INITIAL_END,
            initial_control: INITIAL_CONTROL,
            initial_sample_count: INITIAL_SAMPLE_COUNT,

            handle_radius: HANDLE_RADIUS,
            hit_radius: HIT_RADIUS,
            start_color: START_COLOR,
            end_color: END_COLOR,
            control_color: CONTROL_COLOR,

            line_thickness: LINE_THICKNESS,
            line_color: LINE_COLOR,
            line_mode: LineRenderMode::default(),
            show_sample_points: false,
            sample_point_radius: SAMPLE_POINT_RADIUS,
            sample_point_color: SAMPLE_POINT_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_editor.toml")
    }

    /// Konfigurierte Start-Steuerpunkte.
    pub fn initial_controls(&self) -> ControlSet {
        ControlSet::new(
            Vec2::from_array(self.initial_start),
            Vec2::from_array(self.initial_end),
            Vec2::from_array(self.initial_control),
        )
    }

    /// Konfigurierte Start-Sample-Anzahl (geklemmt).
    pub fn initial_sample_count(&self) -> SampleCount {
        SampleCount::new(self.initial_sample_count)
    }
}
