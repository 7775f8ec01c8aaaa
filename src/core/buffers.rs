//! Vertex-Puffer fester Kapazität für Kontrollpunkte, Kurve und Marker.
//!
//! Alle Offsets (`i * 7` für Marker, `k * MAX_CURVE` für Segmente) werden
//! ausschließlich hier berechnet. Zugriffe außerhalb der Kapazität liefern
//! `None` bzw. `false` und werden verworfen.

use super::bezier::sample_cubic;
use super::marker::{marker_for, MARKER_VERTEX_COUNT};
use glam::Vec2;
use std::ops::Range;

/// Maximale Anzahl Kontrollpunkte (21 Segmente à 4 Punkte).
pub const MAX_VERTEX: usize = 21 * 4;
/// Abtastpunkte pro Segment.
pub const MAX_CURVE: usize = 30;
/// Kontrollpunkte pro kubischem Segment.
pub const SEGMENT_POINTS: usize = 4;
/// Maximale Anzahl Segmente.
pub const MAX_SEGMENTS: usize = MAX_VERTEX / SEGMENT_POINTS;

/// Position + RGBA-Farbe, Grundeinheit aller Puffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColoredVertex {
    /// Position in normalisierten Gerätekoordinaten
    pub position: Vec2,
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl ColoredVertex {
    /// Nullwert (Inhalt gelöschter Puffer).
    pub const ZERO: Self = Self {
        position: Vec2::ZERO,
        color: [0.0; 4],
    };

    /// Erstellt einen neuen Vertex.
    pub fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Arena mit den drei abgeleiteten Vertex-Puffern einer Kurven-Session.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveBuffers {
    points: Vec<ColoredVertex>,
    curve: Vec<ColoredVertex>,
    markers: Vec<ColoredVertex>,
}

impl Default for CurveBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveBuffers {
    /// Erstellt genullte Puffer in voller Kapazität.
    pub fn new() -> Self {
        Self {
            points: vec![ColoredVertex::ZERO; MAX_VERTEX],
            curve: vec![ColoredVertex::ZERO; MAX_CURVE * MAX_SEGMENTS],
            markers: vec![ColoredVertex::ZERO; MARKER_VERTEX_COUNT * MAX_VERTEX],
        }
    }

    /// Setzt alle Puffer auf den Nullwert zurück.
    pub fn reset(&mut self) {
        self.points.fill(ColoredVertex::ZERO);
        self.curve.fill(ColoredVertex::ZERO);
        self.markers.fill(ColoredVertex::ZERO);
    }

    /// Alle Punkt-Slots (inkl. noch nicht belegter).
    pub fn points(&self) -> &[ColoredVertex] {
        &self.points
    }

    /// Kompletter Kurvenpuffer (alle Segmente hintereinander).
    pub fn curve(&self) -> &[ColoredVertex] {
        &self.curve
    }

    /// Kompletter Markerpuffer (7 Vertices pro Punkt).
    pub fn markers(&self) -> &[ColoredVertex] {
        &self.markers
    }

    /// Punkt an Slot `index`.
    pub fn point(&self, index: usize) -> Option<&ColoredVertex> {
        self.points.get(index)
    }

    /// Überschreibt Slot `index`. Gibt `false` zurück, wenn der Slot nicht existiert.
    pub fn set_point(&mut self, index: usize, vertex: ColoredVertex) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = vertex;
                true
            }
            None => false,
        }
    }

    /// Die 7 Marker-Vertices des Punkts `index`.
    pub fn marker_slice(&self, index: usize) -> Option<&[ColoredVertex]> {
        self.markers.get(region(index, MARKER_VERTEX_COUNT)?)
    }

    /// Erzeugt den Marker für Punkt `index` neu.
    pub fn set_marker(&mut self, index: usize, center: Vec2, color: [f32; 4]) -> bool {
        let Some(slots) = region(index, MARKER_VERTEX_COUNT).and_then(|r| self.markers.get_mut(r))
        else {
            return false;
        };
        for (slot, position) in slots.iter_mut().zip(marker_for(center)) {
            *slot = ColoredVertex::new(position, color);
        }
        true
    }

    /// Die `MAX_CURVE` Abtastpunkte des Segments `segment`.
    pub fn segment_slice(&self, segment: usize) -> Option<&[ColoredVertex]> {
        self.curve.get(region(segment, MAX_CURVE)?)
    }

    /// Tesselliert ein Segment aus vier Kontrollpunkten in seinen Puffer-Bereich.
    pub fn write_segment(
        &mut self,
        segment: usize,
        control: [Vec2; SEGMENT_POINTS],
        color: [f32; 4],
    ) -> bool {
        let Some(slots) = region(segment, MAX_CURVE).and_then(|r| self.curve.get_mut(r)) else {
            return false;
        };

        let mut samples = [Vec2::ZERO; MAX_CURVE];
        let [p0, p1, p2, p3] = control;
        sample_cubic(p0, p1, p2, p3, &mut samples);

        for (slot, position) in slots.iter_mut().zip(samples) {
            *slot = ColoredVertex::new(position, color);
        }
        true
    }
}

/// Bereich `[index * stride, (index + 1) * stride)` ohne Überlauf.
fn region(index: usize, stride: usize) -> Option<Range<usize>> {
    let start = index.checked_mul(stride)?;
    let end = start.checked_add(stride)?;
    Some(start..end)
}
