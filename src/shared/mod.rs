//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod line_mode;
mod render_scene;

pub use line_mode::LineRenderMode;
pub use options::EditorOptions;
pub use options::{MIN_SAMPLE_COUNT, WINDOW_SIZE};
pub use render_scene::RenderScene;
