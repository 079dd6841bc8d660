use super::helpers::{create_uniform_binding, create_vertex_buffer, make_blended_pipeline, UniformBinding};
use crate::constants::{LINE_COLOR, MAX_LINE_SEGMENTS};
use folio_core::{Segment, LINES_WGSL};
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LineUniforms {
    view_proj: [[f32; 4]; 4],
    color: [f32; 4],
}

/// Connection lines drawn as a line list, two vertices per segment.
pub struct LinePipeline {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformBinding,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl LinePipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lines_shader"),
            source: wgpu::ShaderSource::Wgsl(LINES_WGSL.into()),
        });
        let uniforms = create_uniform_binding(
            device,
            "line_uniforms",
            std::mem::size_of::<LineUniforms>() as u64,
        );
        let vertex_buffer = create_vertex_buffer(
            device,
            "line_vb",
            (std::mem::size_of::<Segment>() * MAX_LINE_SEGMENTS) as u64,
        );
        let vertex_buffers = [wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        }];
        let pipeline = make_blended_pipeline(
            device,
            "lines_pipeline",
            &uniforms.layout,
            &shader,
            &vertex_buffers,
            wgpu::PrimitiveTopology::LineList,
            format,
        );
        Self {
            pipeline,
            uniforms,
            vertex_buffer,
            vertex_count: 0,
        }
    }

    pub fn write(&mut self, queue: &wgpu::Queue, view_proj: Mat4, segments: &[Segment]) {
        let segments = &segments[..segments.len().min(MAX_LINE_SEGMENTS)];
        queue.write_buffer(
            &self.uniforms.buffer,
            0,
            bytemuck::bytes_of(&LineUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                color: LINE_COLOR,
            }),
        );
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(segments));
        self.vertex_count = (segments.len() * 2) as u32;
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.vertex_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniforms.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}
