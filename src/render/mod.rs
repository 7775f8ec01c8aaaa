//! GPU-Rendering mit wgpu.

mod callback;
mod line_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use line_renderer::LineRenderer;
pub use types::LineVertex;
use types::RenderContext;

use eframe::{egui_wgpu, wgpu};

/// Haupt-Renderer für Griffe, Kurve und Marker.
///
/// Dieser Renderer verwaltet seinen eigenen Zustand (GPU-Buffer, Pipelines)
/// und bietet eine schlanke API: `new()` + `render_scene()`.
pub struct Renderer {
    handle_renderer: LineRenderer,
    curve_renderer: LineRenderer,
    marker_renderer: LineRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden, alle Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Curves Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            handle_renderer: LineRenderer::new(
                render_state,
                &shader,
                wgpu::PrimitiveTopology::LineList,
                "Handle Lines",
            ),
            curve_renderer: LineRenderer::new(
                render_state,
                &shader,
                wgpu::PrimitiveTopology::LineStrip,
                "Curve Strip",
            ),
            marker_renderer: LineRenderer::new(
                render_state,
                &shader,
                wgpu::PrimitiveTopology::LineStrip,
                "Marker Strips",
            ),
        }
    }

    /// Rendert die komplette Szene
    pub fn render_scene(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        if scene.is_empty() {
            return;
        }

        let ctx = RenderContext { device, queue };

        self.handle_renderer.upload(&ctx, &scene.handles);
        self.curve_renderer.upload(&ctx, &scene.curve);
        self.marker_renderer.upload(&ctx, &scene.markers);

        log::trace!(
            "render_scene: {} Griff-, {} Kurven-Vertices, Marker {:?}",
            scene.handle_vertex_count(),
            scene.curve_vertex_count(),
            scene.visible_markers
        );

        // 1. Kontrollpolygon
        self.handle_renderer
            .draw(render_pass, std::iter::once(0..scene.handle_vertex_count()));
        // 2. Kurve
        self.curve_renderer
            .draw(render_pass, std::iter::once(0..scene.curve_vertex_count()));
        // 3. Marker (je ein Strip à 7 Vertices)
        self.marker_renderer.draw(render_pass, scene.marker_draws());
    }
}
