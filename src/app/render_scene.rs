//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{ColoredVertex, MARKER_VERTEX_COUNT};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let session = &state.session;
    let buffers = session.buffers();

    // Griffe in eigener Farbe, Positionen aus dem Punktpuffer
    let handles = session
        .handle_vertices()
        .iter()
        .map(|v| ColoredVertex::new(v.position, state.options.handle_color))
        .collect();

    let curve = buffers
        .curve()
        .get(..session.curve_vertex_count())
        .unwrap_or(&[])
        .to_vec();

    let visible_markers = session.visible_marker_range(state.marker_window());
    let markers = buffers
        .markers()
        .get(..visible_markers.end * MARKER_VERTEX_COUNT)
        .unwrap_or(&[])
        .to_vec();

    RenderScene {
        viewport_size,
        background_color: state.options.background_color,
        handles,
        curve,
        markers,
        visible_markers,
    }
}
