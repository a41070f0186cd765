//! Core-Domänentypen: Steuerpunkte, Kurvenmodell, Tessellierung.
//!
//! - ControlSet: die drei Punkte der quadratischen Kurve
//! - CurveModel: autoritativer Zustand + gecachte Polylinie
//! - tessellate: Polylinie → orientierte Rechtecke

pub mod control_set;
/// Kurvenmodell und Abtastung
pub mod curve;
pub mod tessellation;

pub use control_set::{ControlSet, DragTarget};
pub use curve::{quadratic_bezier, sample, CurveModel, SampleCount};
pub use tessellation::{tessellate, RenderSegment, TessellationCache};
