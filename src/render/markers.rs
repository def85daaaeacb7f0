use super::helpers;
use super::mesh::{unit_box_mesh, BoxVertex, ARMS_PER_MARKER};
use crate::core::mapper::MARKER_COUNT;
use wgpu::util::DeviceExt;

pub(crate) const MARKER_INSTANCES: usize = MARKER_COUNT * ARMS_PER_MARKER;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MarkerUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MarkerInstance {
    pub(crate) model: [[f32; 4]; 4],
}

pub(crate) struct MarkerResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

const BOX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4
];

pub(crate) fn create_marker_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> MarkerResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("markers_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MARKERS_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(device, "markers_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("markers_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("markers_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_marker"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<BoxVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &BOX_ATTRIBUTES,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MarkerInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRIBUTES,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // mirrored instances flip winding, so no culling
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(helpers::depth_state()),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_marker"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let (verts, indices) = unit_box_mesh();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("marker_vertices"),
        contents: bytemuck::cast_slice(&verts),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("marker_indices"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (std::mem::size_of::<MarkerInstance>() * MARKER_INSTANCES) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "markers_uniforms",
        std::mem::size_of::<MarkerUniforms>(),
    );
    let bind_group = helpers::uniform_bind_group(device, "markers_bg", &bgl, &uniform_buffer);

    MarkerResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
        instance_buffer,
        uniform_buffer,
        bind_group,
    }
}
