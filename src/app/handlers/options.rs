//! Handler für das Persistieren der Optionen.

use crate::app::AppState;

/// Schreibt die aktuellen Optionen nach `state.options_path`.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.options_path)?;
    state.ui.set_status("Optionen gespeichert");
    Ok(())
}
