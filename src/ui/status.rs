//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::{SessionPhase, MAX_VERTEX};
use glam::Vec2;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, pointer: Option<Vec2>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Points: {}/{} | Segments: {}",
                state.point_count(),
                MAX_VERTEX,
                state.segment_count()
            ));

            ui.separator();

            let phase = match state.session.phase() {
                SessionPhase::Empty => "Empty",
                SessionPhase::Building => "Building",
                SessionPhase::Finalized => "Finalized",
            };
            ui.label(format!("Phase: {}", phase));

            ui.separator();

            let snapshot = match state.session.snapshot() {
                Some(snapshot) => format!("Snapshot: {} points", snapshot.count()),
                None => "Snapshot: none".to_string(),
            };
            ui.label(snapshot);

            if let Some(pos) = pointer {
                ui.separator();
                ui.label(format!("Pointer: ({:.3}, {:.3})", pos.x, pos.y));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
