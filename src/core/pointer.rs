//! Umrechnung von Bildschirm-Pixeln in normalisierte Gerätekoordinaten.

use glam::Vec2;

/// Rechnet eine Pointer-Position (Pixel, relativ zur Zeichenfläche) in den
/// Bereich -1.0..1.0 um.
///
/// `center` ist der Mittelpunkt der Zeichenfläche in Pixeln. Die Y-Achse wird
/// invertiert, da Bildschirm-Y nach unten wächst. Werte außerhalb der Fläche
/// werden nicht geklemmt. Eine Achse mit Mittelpunkt 0 liefert 0.
pub fn normalize_pointer(pointer: Vec2, center: Vec2) -> Vec2 {
    let x = if center.x.abs() > f32::EPSILON {
        (pointer.x - center.x) / center.x
    } else {
        0.0
    };
    let y = if center.y.abs() > f32::EPSILON {
        (center.y - pointer.y) / center.y
    } else {
        0.0
    };
    Vec2::new(x, y)
}
