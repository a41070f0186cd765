//! Application-Layer: Controller, State, Events und Interaktion.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod interaction;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurve, Interaktion, Optionen).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use interaction::{DragState, InteractionController};
pub use render_scene::build as build_render_scene;
pub use state::AppState;
