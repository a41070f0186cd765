//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::SampleCount;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let dragging = state.interaction.drag_state().is_active();

    match intent {
        // Während eines Drags wird ein weiteres Pointer-Down ignoriert
        AppIntent::PointerPressed { pos } if !dragging => vec![AppCommand::BeginDrag { pos }],
        AppIntent::PointerPressed { .. } => vec![],
        // Bewegung ohne Drag erzeugt keine Commands (hält das Log schlank)
        AppIntent::PointerMoved { pos } if dragging => vec![AppCommand::UpdateDrag { pos }],
        AppIntent::PointerMoved { .. } => vec![],
        AppIntent::PointerReleased if dragging => vec![AppCommand::EndDrag],
        AppIntent::PointerReleased => vec![],
        AppIntent::Scrolled { delta } if delta != 0.0 => {
            vec![AppCommand::AdjustSampleCount { delta }]
        }
        AppIntent::Scrolled { .. } => vec![],
        AppIntent::CurvePlacementRequested {
            controls,
            sample_count,
        } => vec![AppCommand::PlaceCurve {
            controls,
            sample_count: SampleCount::new(sample_count),
        }],
        AppIntent::ResetCurveRequested => vec![
            AppCommand::EndDrag,
            AppCommand::PlaceCurve {
                controls: state.options.initial_controls(),
                sample_count: state.options.initial_sample_count(),
            },
        ],
        AppIntent::LineRenderModeChanged { mode } => {
            vec![AppCommand::SetLineRenderMode { mode }]
        }
        AppIntent::SamplePointsToggled { visible } => {
            vec![AppCommand::SetSamplePointsVisible { visible }]
        }
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
