//! Zeichenstrategie für die Kurvenlinie (shared zwischen App und Renderer).

use serde::{Deserialize, Serialize};

/// Wie die Polylinie an den Renderer übergeben wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineRenderMode {
    /// Native Linie mit Breite (egui `Shape::line`), keine Tessellierung
    #[default]
    NativeStrip,
    /// Ein gedrehtes Rechteck pro Segment (Fallback ohne native Linienbreite)
    TessellatedQuads,
}

impl LineRenderMode {
    /// Anzeigename für Menü und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            LineRenderMode::NativeStrip => "Native Linie",
            LineRenderMode::TessellatedQuads => "Quads (tesselliert)",
        }
    }
}
