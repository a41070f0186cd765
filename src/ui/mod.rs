//! UI-Komponenten: Menü, Status-Bar, Optionen-Dialog, Canvas-Input.

pub mod input;
/// UI-Layer mit egui
///
/// Menü und Dialoge erzeugen nur `AppIntent`s; Mutationen laufen
/// ausschließlich über den `AppController`.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
