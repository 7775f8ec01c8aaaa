//! Generischer Linien-Renderer (LineList oder LineStrip) mit eigenem Vertex-Buffer.

use super::types::{grown_capacity, LineVertex, RenderContext};
use crate::core::ColoredVertex;
use eframe::{egui_wgpu, wgpu};
use std::ops::Range;

/// Renderer für eine Gruppe farbiger Linien mit fester Topologie.
pub struct LineRenderer {
    label: &'static str,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    /// Wiederverwendbarer Scratch-Buffer für Vertex-Daten
    vertex_scratch: Vec<LineVertex>,
    uploaded: usize,
}

impl LineRenderer {
    /// Erstellt einen Linien-Renderer mit der gegebenen Topologie.
    pub fn new(
        render_state: &egui_wgpu::RenderState,
        shader: &wgpu::ShaderModule,
        topology: wgpu::PrimitiveTopology,
        label: &'static str,
    ) -> Self {
        let device = &render_state.device;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_line"),
                buffers: &[LineVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            label,
            pipeline,
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_scratch: Vec::new(),
            uploaded: 0,
        }
    }

    /// Lädt die Vertices in den GPU-Buffer hoch (wächst bei Bedarf).
    pub(crate) fn upload(&mut self, ctx: &RenderContext, vertices: &[ColoredVertex]) {
        let mut scratch = std::mem::take(&mut self.vertex_scratch);
        scratch.clear();
        scratch.extend(vertices.iter().map(LineVertex::from));
        self.uploaded = scratch.len();

        if scratch.is_empty() {
            self.vertex_scratch = scratch;
            return;
        }

        if self.vertex_buffer.is_none() || scratch.len() > self.vertex_capacity {
            let capacity = grown_capacity(scratch.len());
            let vertex_size = std::mem::size_of::<LineVertex>() as u64;
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: capacity as u64 * vertex_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = capacity;
        }

        if let Some(vertex_buffer) = &self.vertex_buffer {
            ctx.queue
                .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&scratch));
        }

        self.vertex_scratch = scratch;
    }

    /// Zeichnet die angegebenen Vertex-Bereiche des zuletzt hochgeladenen Buffers.
    pub(crate) fn draw<I>(&self, render_pass: &mut wgpu::RenderPass<'static>, ranges: I)
    where
        I: IntoIterator<Item = Range<u32>>,
    {
        if self.uploaded == 0 {
            return;
        }
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            log::error!("{}: Vertex-Buffer fehlt vor dem Draw-Call", self.label);
            return;
        };

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));

        let limit = self.uploaded as u32;
        for range in ranges {
            if range.is_empty() || range.end > limit {
                continue;
            }
            render_pass.draw(range, 0..1);
        }
    }
}
