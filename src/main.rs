//! Bézier-Editor.
//!
//! Quadratische Bézier-Kurve mit drei ziehbaren Handles; Mausrad ändert
//! die Anzahl der Abtastpunkte. Darstellung über egui + eframe (glow).

use eframe::egui;
use quad_bezier_editor::render::{self, EguiScenePainter};
use quad_bezier_editor::shared::WINDOW_SIZE;
use quad_bezier_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(WINDOW_SIZE)
                .with_title("Bézier-Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        state.config_path = Some(config_path);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = self.show_canvas(ctx, events);

        self.maybe_request_repaint(ctx, has_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        events
    }

    /// Canvas: Pointer-/Scroll-Events einsammeln, alle Intents anwenden,
    /// danach die aktualisierte Szene zeichnen.
    fn show_canvas(&mut self, ctx: &egui::Context, mut events: Vec<AppIntent>) -> bool {
        let background = render::to_color32(self.state.options.background_color);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, &response));
                let has_events = !events.is_empty();

                let scene = self.controller.run_frame(&mut self.state, events);
                let mut painter = EguiScenePainter::new(ui.painter(), rect.min);
                render::paint_scene(&scene, &mut painter);

                has_events
            })
            .inner
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if has_events
            || self.state.interaction.drag_state().is_active()
            || self.state.show_options_dialog
            || self.state.should_exit
        {
            ctx.request_repaint();
        }
    }
}
