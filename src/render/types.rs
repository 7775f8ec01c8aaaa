//! Rendering-Typen und GPU-Vertex-Layout.

use crate::core::ColoredVertex;
use bytemuck::{Pod, Zeroable};

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen, die jeder Sub-Renderer bei jedem Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
}

/// Vertex für Linien-Geometrie (Griffe, Kurve, Marker).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in normalisierten Gerätekoordinaten
    pub position: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl From<&ColoredVertex> for LineVertex {
    fn from(v: &ColoredVertex) -> Self {
        Self {
            position: v.position.to_array(),
            color: v.color,
        }
    }
}

impl LineVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Neue Buffer-Kapazität: nächste Zweierpotenz, mindestens 64 Vertices.
pub(crate) fn grown_capacity(needed: usize) -> usize {
    needed.max(64).next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_line_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
        assert_eq!(LineVertex::desc().array_stride, 24);
    }

    #[test]
    fn test_conversion_keeps_position_and_color() {
        let v = ColoredVertex::new(Vec2::new(0.5, -0.25), [1.0, 0.5, 0.25, 1.0]);
        let line = LineVertex::from(&v);
        assert_eq!(line.position, [0.5, -0.25]);
        assert_eq!(line.color, [1.0, 0.5, 0.25, 1.0]);
    }

    #[test]
    fn test_grown_capacity() {
        assert_eq!(grown_capacity(0), 64);
        assert_eq!(grown_capacity(64), 64);
        assert_eq!(grown_capacity(65), 128);
        assert_eq!(grown_capacity(630), 1024);
    }
}
