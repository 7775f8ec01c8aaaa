//! Rauten-Marker um Kontrollpunkte.

use glam::Vec2;

/// Anzahl Vertices pro Marker (geschlossener Linienzug, erster = letzter).
pub const MARKER_VERTEX_COUNT: usize = 7;

/// Relative Eckpunkte eines Markers, beginnend und endend unten-mittig.
const MARKER_OFFSETS: [Vec2; MARKER_VERTEX_COUNT] = [
    Vec2::new(0.0, -0.025),
    Vec2::new(-0.025, 0.0),
    Vec2::new(-0.015, 0.025),
    Vec2::new(0.0, 0.015),
    Vec2::new(0.015, 0.025),
    Vec2::new(0.025, 0.0),
    Vec2::new(0.0, -0.025),
];

/// Liefert die 7 Marker-Vertices um `point`.
pub fn marker_for(point: Vec2) -> [Vec2; MARKER_VERTEX_COUNT] {
    MARKER_OFFSETS.map(|offset| point + offset)
}
