//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Nach dem letzten Command wird die Polylinie neu abgetastet (falls dirty),
    /// sodass Steuerpunkte und Polylinie nach jedem Intent konsistent sind.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));
        state.curve.refresh();
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kurven-Interaktion ===
            AppCommand::BeginDrag { pos } => handlers::curve::begin_drag(state, pos),
            AppCommand::UpdateDrag { pos } => handlers::curve::update_drag(state, pos),
            AppCommand::EndDrag => handlers::curve::end_drag(state),
            AppCommand::AdjustSampleCount { delta } => {
                handlers::curve::adjust_sample_count(state, delta)
            }
            AppCommand::PlaceCurve {
                controls,
                sample_count,
            } => handlers::curve::place_curve(state, controls, sample_count)?,

            // === Darstellung ===
            AppCommand::SetLineRenderMode { mode } => {
                handlers::view::set_line_render_mode(state, mode)
            }
            AppCommand::SetSamplePointsVisible { visible } => {
                handlers::view::set_sample_points_visible(state, visible)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene<'a>(&self, state: &'a mut AppState) -> RenderScene<'a> {
        render_scene::build(state)
    }

    /// Ein kompletter Frame: alle Intents in Reihenfolge anwenden, dann die Szene bauen.
    ///
    /// Die gelieferte Szene enthält damit bereits die Eingaben dieses Frames.
    /// Fehlgeschlagene Intents werden geloggt und übersprungen.
    pub fn run_frame<'a>(
        &mut self,
        state: &'a mut AppState,
        intents: Vec<AppIntent>,
    ) -> RenderScene<'a> {
        for intent in intents {
            if let Err(e) = self.handle_intent(state, intent) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
        self.build_render_scene(state)
    }
}
