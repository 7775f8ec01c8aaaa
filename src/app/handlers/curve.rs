//! Handler für Punkt-Eingabe und Löschen der Kurve.

use crate::app::AppState;
use crate::core::CommitOutcome;
use glam::Vec2;

/// Setzt den Live-Punkt auf die Pointer-Position.
pub fn track_pointer(state: &mut AppState, pos: Vec2) {
    state.session.track_pointer(pos);
}

/// Übernimmt einen Kontrollpunkt und aktualisiert die Statusleiste.
pub fn commit_point(state: &mut AppState, pos: Vec2) {
    match state.session.commit(pos) {
        CommitOutcome::Ignored => {
            state.ui.set_status("Kurve abgeschlossen, weitere Punkte werden ignoriert");
        }
        CommitOutcome::Committed => {
            log::debug!("Punkt {} übernommen: {:?}", state.session.count(), pos);
        }
        CommitOutcome::SegmentCompleted { segment, anchor } => {
            let message = match anchor {
                Some(_) => format!("Segment {} fertig", segment + 1),
                None => format!("Segment {} fertig, Kurve abgeschlossen", segment + 1),
            };
            state.ui.set_status(message);
        }
    }
}

/// Verwirft alle Punkte, Kurven und Marker. Der Snapshot bleibt erhalten.
pub fn clear(state: &mut AppState) {
    state.session.clear();
    state.ui.status_message = None;
}
