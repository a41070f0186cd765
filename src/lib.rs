//! Interaktiver Editor für quadratische Bézier-Kurven.
//! Core-Funktionalität als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState, InteractionController};
pub use core::{
    quadratic_bezier, sample, tessellate, ControlSet, CurveModel, DragTarget, RenderSegment,
    SampleCount, TessellationCache,
};
pub use shared::{EditorOptions, LineRenderMode, RenderScene};
