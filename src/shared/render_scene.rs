//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{ColoredVertex, MARKER_VERTEX_COUNT};
use std::ops::Range;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
    /// Kontrollpolygon des Segments im Aufbau (LineList)
    pub handles: Vec<ColoredVertex>,
    /// Abtastpunkte aller sichtbaren Segmente (LineStrip)
    pub curve: Vec<ColoredVertex>,
    /// Marker-Vertices aller belegten Punkte, 7 pro Punkt
    pub markers: Vec<ColoredVertex>,
    /// Indizes der Punkte, deren Marker gezeichnet werden
    pub visible_markers: Range<usize>,
}

impl RenderScene {
    /// Gibt zurück, ob nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty() && self.curve.is_empty() && self.visible_markers.is_empty()
    }

    /// Anzahl Vertices der Griff-Linien (auf gerade Anzahl gekürzt).
    pub fn handle_vertex_count(&self) -> u32 {
        (self.handles.len() & !1) as u32
    }

    /// Anzahl Vertices des Kurven-Strips.
    pub fn curve_vertex_count(&self) -> u32 {
        self.curve.len() as u32
    }

    /// Vertex-Bereiche der Marker-Draws (ein LineStrip pro Marker).
    pub fn marker_draws(&self) -> impl Iterator<Item = Range<u32>> + '_ {
        let available = self.markers.len() / MARKER_VERTEX_COUNT;
        let end = self.visible_markers.end.min(available);
        let start = self.visible_markers.start.min(end);
        (start..end).map(|i| {
            let first = (i * MARKER_VERTEX_COUNT) as u32;
            first..first + MARKER_VERTEX_COUNT as u32
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn vertices(n: usize) -> Vec<ColoredVertex> {
        (0..n)
            .map(|i| ColoredVertex::new(Vec2::splat(i as f32), [1.0; 4]))
            .collect()
    }

    #[test]
    fn test_default_scene_is_empty() {
        let scene = RenderScene::default();
        assert!(scene.is_empty());
        assert_eq!(scene.marker_draws().count(), 0);
    }

    #[test]
    fn test_odd_handle_count_drops_dangling_vertex() {
        let scene = RenderScene {
            handles: vertices(3),
            ..RenderScene::default()
        };
        assert_eq!(scene.handle_vertex_count(), 2);
        assert!(!scene.is_empty());
    }

    #[test]
    fn test_marker_draws_use_seven_vertex_offsets() {
        let scene = RenderScene {
            markers: vertices(5 * MARKER_VERTEX_COUNT),
            visible_markers: 2..5,
            ..RenderScene::default()
        };

        let draws: Vec<_> = scene.marker_draws().collect();
        assert_eq!(draws, vec![14..21, 21..28, 28..35]);
    }

    #[test]
    fn test_marker_draws_are_clamped_to_buffer() {
        let scene = RenderScene {
            markers: vertices(2 * MARKER_VERTEX_COUNT),
            visible_markers: 0..10,
            ..RenderScene::default()
        };
        assert_eq!(scene.marker_draws().count(), 2);
    }
}
