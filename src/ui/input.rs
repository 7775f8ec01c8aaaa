//! Viewport-Input-Handling: Pointer, Klicks und Tasten → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::normalize_pointer;
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    /// Letzte normalisierte Pointer-Position über dem Viewport
    last_pointer: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Letzte bekannte Pointer-Position in normalisierten Koordinaten.
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Pro Frame höchstens ein Pointer-Intent: ein Primärklick wird als
    /// `PointCommitRequested` gemeldet, sonst die Hover-Position als
    /// `PointerMoved`.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        let rect = response.rect;
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let pos = screen_pos_to_ndc(pointer_pos, rect);
                self.last_pointer = Some(pos);
                events.push(AppIntent::PointCommitRequested { pos });
            }
        } else if let Some(pointer_pos) = response.hover_pos() {
            let pos = screen_pos_to_ndc(pointer_pos, rect);
            self.last_pointer = Some(pos);
            events.push(AppIntent::PointerMoved { pos });
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in normalisierte Gerätekoordinaten des
/// Viewport-Rechtecks um (Mitte = Ursprung, y nach oben).
pub(crate) fn screen_pos_to_ndc(pointer: egui::Pos2, rect: egui::Rect) -> Vec2 {
    let local = pointer - rect.min;
    let center = rect.size() * 0.5;
    normalize_pointer(Vec2::new(local.x, local.y), Vec2::new(center.x, center.y))
}
