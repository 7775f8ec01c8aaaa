//! Handler für Snapshot speichern und wiederherstellen.

use crate::app::AppState;
use crate::core::CurveError;

/// Statusmeldung beim Laden ohne gespeicherten Snapshot.
pub const NO_SNAPSHOT_MESSAGE: &str = "No snapshot saved yet";

/// Kopiert die aktuelle Kurve in den Snapshot-Slot.
pub fn save(state: &mut AppState) {
    let count = state.session.save().count();
    state
        .ui
        .set_status(format!("Snapshot gespeichert ({} Punkte)", count));
}

/// Stellt den Snapshot wieder her.
///
/// Fehlt der Snapshot, bleibt die Session unverändert; der Fall wird als
/// Warnung geloggt und in der Statusleiste angezeigt.
pub fn restore(state: &mut AppState) -> anyhow::Result<()> {
    match state.session.restore() {
        Ok(()) => {
            state.ui.set_status(format!(
                "Snapshot geladen ({} Punkte)",
                state.session.count()
            ));
            Ok(())
        }
        Err(CurveError::NoSnapshot) => {
            log::warn!("Laden ignoriert: {}", CurveError::NoSnapshot);
            state.ui.set_status(NO_SNAPSHOT_MESSAGE);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
