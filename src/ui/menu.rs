//! Top-Menü (Session, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Session", |ui| {
                if ui.button("Save snapshot (S)").clicked() {
                    events.push(AppIntent::SaveSnapshotRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        state.session.has_snapshot(),
                        egui::Button::new("Load snapshot (L)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::LoadSnapshotRequested);
                    ui.close();
                }

                if ui.button("Clear (D)").clicked() {
                    events.push(AppIntent::ClearRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Save options").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit (Esc)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let mut show_all = state.view.show_all_markers;
                if ui.checkbox(&mut show_all, "Show all markers").changed() {
                    events.push(AppIntent::ToggleAllMarkersRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
