//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Bei gehaltener Ctrl/Cmd-Taste werden keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, escape, key_s, key_l, key_d, delete) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::L),
            i.key_pressed(egui::Key::D),
            i.key_pressed(egui::Key::Delete),
        )
    });

    if modifiers.command {
        return events;
    }

    if escape {
        events.push(AppIntent::ExitRequested);
    }

    if key_s {
        events.push(AppIntent::SaveSnapshotRequested);
    }

    if key_l {
        events.push(AppIntent::LoadSnapshotRequested);
    }

    if key_d || delete {
        events.push(AppIntent::ClearRequested);
    }

    events
}
