//! Handler für Viewport, Marker-Anzeige und Anwendungssteuerung.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Schaltet zwischen allen Markern und dem Marker-Fenster um.
pub fn toggle_all_markers(state: &mut AppState) {
    state.view.show_all_markers = !state.view.show_all_markers;
    log::debug!("Alle Marker anzeigen: {}", state.view.show_all_markers);
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
