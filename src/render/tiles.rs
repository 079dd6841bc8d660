use super::helpers::{
    create_static_vertex_buffer, create_uniform_binding, create_vertex_buffer,
    make_blended_pipeline, UniformBinding,
};
use crate::constants::{MAX_TILE_INSTANCES, TILE_PALETTE};
use folio_core::{ItemFrame, TILES_WGSL};
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct TileUniforms {
    view_proj: [[f32; 4]; 4],
    flash: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileInstance {
    model: [[f32; 4]; 4],
    size: [f32; 2],
    color: [f32; 4],
}

impl TileInstance {
    fn from_item(frame: &ItemFrame<'_>) -> Self {
        let [r, g, b] = TILE_PALETTE[frame.index % TILE_PALETTE.len()];
        Self {
            model: frame.model.to_cols_array_2d(),
            size: frame.size.to_array(),
            color: [r, g, b, frame.transform.opacity],
        }
    }
}

/// Instances ordered far to near so alpha blending composites correctly
/// without a depth buffer.
pub fn tile_instances(items: &[ItemFrame<'_>]) -> Vec<TileInstance> {
    let mut order: Vec<&ItemFrame<'_>> = items.iter().collect();
    order.sort_by(|a, b| {
        a.transform
            .position
            .z
            .total_cmp(&b.transform.position.z)
    });
    if order.len() > MAX_TILE_INSTANCES {
        log::warn!(
            "[render] {} tiles, drawing the nearest {MAX_TILE_INSTANCES}",
            order.len()
        );
        order.drain(..order.len() - MAX_TILE_INSTANCES);
    }
    order.into_iter().map(TileInstance::from_item).collect()
}

pub struct TilePipeline {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformBinding,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_count: u32,
}

impl TilePipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tiles_shader"),
            source: wgpu::ShaderSource::Wgsl(TILES_WGSL.into()),
        });
        let uniforms = create_uniform_binding(
            device,
            "tile_uniforms",
            std::mem::size_of::<TileUniforms>() as u64,
        );
        // Unit quad centred on the origin, two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb =
            create_static_vertex_buffer(device, "tile_quad_vb", bytemuck::cast_slice(&quad_vertices));
        let instance_vb = create_vertex_buffer(
            device,
            "tile_instance_vb",
            (std::mem::size_of::<TileInstance>() * MAX_TILE_INSTANCES) as u64,
        );

        let vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-tile model matrix columns, size, color
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<TileInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![
                    1 => Float32x4,
                    2 => Float32x4,
                    3 => Float32x4,
                    4 => Float32x4,
                    5 => Float32x2,
                    6 => Float32x4,
                ],
            },
        ];
        let pipeline = make_blended_pipeline(
            device,
            "tiles_pipeline",
            &uniforms.layout,
            &shader,
            &vertex_buffers,
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );
        Self {
            pipeline,
            uniforms,
            quad_vb,
            instance_vb,
            instance_count: 0,
        }
    }

    pub fn write(&mut self, queue: &wgpu::Queue, view_proj: Mat4, flash: f32, instances: &[TileInstance]) {
        queue.write_buffer(
            &self.uniforms.buffer,
            0,
            bytemuck::bytes_of(&TileUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                flash,
                _pad: [0.0; 3],
            }),
        );
        queue.write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));
        self.instance_count = instances.len() as u32;
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniforms.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..6, 0..self.instance_count);
    }
}
