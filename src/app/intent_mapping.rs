//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { pos } => {
            if state.session.is_finalized() {
                Vec::new()
            } else {
                vec![AppCommand::TrackPointer { pos }]
            }
        }
        // Nach dem Übernehmen sofort wieder verfolgen, damit die Vorschau
        // im selben Frame weiterläuft.
        AppIntent::PointCommitRequested { pos } => vec![
            AppCommand::CommitPoint { pos },
            AppCommand::TrackPointer { pos },
        ],
        AppIntent::SaveSnapshotRequested => vec![AppCommand::SaveSnapshot],
        AppIntent::LoadSnapshotRequested => vec![AppCommand::RestoreSnapshot],
        AppIntent::ClearRequested => vec![AppCommand::ClearSession],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ToggleAllMarkersRequested => vec![AppCommand::ToggleAllMarkers],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}
