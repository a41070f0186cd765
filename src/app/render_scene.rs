//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::RenderSegment;
use crate::shared::{LineRenderMode, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Tastet bei Bedarf neu ab; im Quad-Modus werden die Segmente aus dem
/// Cache geliefert (neu tesselliert nur bei geänderter Polylinie oder Breite).
pub fn build(state: &mut AppState) -> RenderScene<'_> {
    state.curve.refresh();

    let AppState {
        curve,
        tessellation,
        options,
        ..
    } = state;

    let segments: &[RenderSegment] = match options.line_mode {
        LineRenderMode::NativeStrip => &[],
        LineRenderMode::TessellatedQuads => {
            tessellation.segments(curve.revision(), curve.polyline(), options.line_thickness)
        }
    };

    RenderScene {
        polyline: curve.polyline(),
        segments,
        handles: curve.controls().handles(),
        options,
    }
}
