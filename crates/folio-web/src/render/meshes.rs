use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::assets::{ImageRgba, SceneAssets};
use crate::labels;
use folio_core::{
    label_quad, panel_box, uv_sphere, MeshData, SceneState, Session, EARTH_RADIUS, LABEL_OFFSET_Y,
    LABEL_SCALE, MOON_RADIUS, PANEL_HALF_EXTENTS,
};

const SPHERE_SEGMENTS: u32 = 48;
const SPHERE_RINGS: u32 = 32;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) camera_right: [f32; 4],
    pub(crate) camera_up: [f32; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) sun_dir: [f32; 4],
    pub(crate) time: f32,
    pub(crate) _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BodyInstance {
    model: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PanelInstance {
    model: [[f32; 4]; 4],
    // rgb paper tone, a = emissive lift on hover
    tint: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LabelInstance {
    pos_alpha: [f32; 4],
    uv_rect: [f32; 4], // offset.xy, scale.xy into the atlas
    size_pad: [f32; 4],
}

// slot 0: interleaved position/normal/uv
const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 24,
        shader_location: 2,
    },
];

// slot 1, bodies: model matrix as four column vectors
const BODY_INSTANCE_ATTRS: [wgpu::VertexAttribute; 4] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 0,
        shader_location: 3,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 16,
        shader_location: 4,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 32,
        shader_location: 5,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 48,
        shader_location: 6,
    },
];

// slot 1, panels: model matrix plus tint
const PANEL_INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 0,
        shader_location: 3,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 16,
        shader_location: 4,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 32,
        shader_location: 5,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 48,
        shader_location: 6,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 64,
        shader_location: 7,
    },
];

// slot 1, labels
const LABEL_INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 0,
        shader_location: 3,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 16,
        shader_location: 4,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 32,
        shader_location: 5,
    },
];

pub(crate) struct MeshResources {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bg_scene: wgpu::BindGroup,
    pub(crate) bg_earth: wgpu::BindGroup,
    pub(crate) bg_moon: wgpu::BindGroup,
    pub(crate) bg_labels: wgpu::BindGroup,
    pub(crate) body_pipeline: wgpu::RenderPipeline,
    pub(crate) panel_pipeline: wgpu::RenderPipeline,
    pub(crate) label_pipeline: wgpu::RenderPipeline,
    pub(crate) sphere_vb: wgpu::Buffer,
    pub(crate) sphere_ib: wgpu::Buffer,
    pub(crate) sphere_index_count: u32,
    pub(crate) panel_vb: wgpu::Buffer,
    pub(crate) panel_ib: wgpu::Buffer,
    pub(crate) panel_index_count: u32,
    pub(crate) quad_vb: wgpu::Buffer,
    pub(crate) quad_ib: wgpu::Buffer,
    pub(crate) quad_index_count: u32,
    pub(crate) body_instances: wgpu::Buffer,
    pub(crate) panel_instances: wgpu::Buffer,
    pub(crate) label_instances: wgpu::Buffer,
}

fn upload_mesh(
    device: &wgpu::Device,
    label: &str,
    mesh: &MeshData,
) -> (wgpu::Buffer, wgpu::Buffer, u32) {
    let vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    (vb, ib, mesh.index_count())
}

fn instance_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn texture_bind_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

#[allow(clippy::too_many_arguments)]
fn make_scene_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vs_entry: &str,
    fs_entry: &str,
    buffers: &[wgpu::VertexBufferLayout],
    hdr_format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    depth_write: bool,
    cull: Option<wgpu::Face>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: cull,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// Stack the per-panel caption bitmaps into one vertical atlas.
fn label_atlas(images: &[ImageRgba]) -> ImageRgba {
    let rows = images.len().max(1) as u32;
    let mut rgba = Vec::with_capacity((labels::LABEL_PX_W * labels::LABEL_PX_H * rows * 4) as usize);
    for img in images {
        rgba.extend_from_slice(&img.rgba);
    }
    rgba.resize((labels::LABEL_PX_W * labels::LABEL_PX_H * rows * 4) as usize, 0);
    ImageRgba {
        rgba,
        width: labels::LABEL_PX_W,
        height: labels::LABEL_PX_H * rows,
    }
}

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    hdr_format: wgpu::TextureFormat,
    sampler: &wgpu::Sampler,
    assets: &SceneAssets,
) -> MeshResources {
    let panel_count = assets.labels.len().max(1) as u64;

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(super::SCENE_WGSL.into()),
    });

    let (sphere_vb, sphere_ib, sphere_index_count) =
        upload_mesh(device, "sphere", &uv_sphere(1.0, SPHERE_SEGMENTS, SPHERE_RINGS));
    let (panel_vb, panel_ib, panel_index_count) =
        upload_mesh(device, "panel", &panel_box(PANEL_HALF_EXTENTS));
    let (quad_vb, quad_ib, quad_index_count) = upload_mesh(device, "label_quad", &label_quad());

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let body_instances = instance_buffer(
        device,
        "body_instances",
        2 * std::mem::size_of::<BodyInstance>() as u64,
    );
    let panel_instances = instance_buffer(
        device,
        "panel_instances",
        panel_count * std::mem::size_of::<PanelInstance>() as u64,
    );
    let label_instances = instance_buffer(
        device,
        "label_instances",
        panel_count * std::mem::size_of::<LabelInstance>() as u64,
    );

    let bgl_scene = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let bgl_texture = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_texture_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    let bg_scene = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl_scene,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let (_earth_tex, earth_view) =
        super::helpers::create_rgba_texture(device, queue, "earth_tex", &assets.earth);
    let (_moon_tex, moon_view) =
        super::helpers::create_rgba_texture(device, queue, "moon_tex", &assets.moon);
    let atlas = label_atlas(&assets.labels);
    let (_atlas_tex, atlas_view) =
        super::helpers::create_rgba_texture(device, queue, "label_atlas", &atlas);

    let bg_earth = texture_bind_group(device, "bg_earth", &bgl_texture, &earth_view, sampler);
    let bg_moon = texture_bind_group(device, "bg_moon", &bgl_texture, &moon_view, sampler);
    let bg_labels = texture_bind_group(device, "bg_labels", &bgl_texture, &atlas_view, sampler);

    let pl_textured = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_scene_textured"),
        bind_group_layouts: &[&bgl_scene, &bgl_texture],
        push_constant_ranges: &[],
    });
    let pl_plain = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_scene_plain"),
        bind_group_layouts: &[&bgl_scene],
        push_constant_ranges: &[],
    });

    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<folio_core::MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    };
    let body_pipeline = make_scene_pipeline(
        device,
        "body_pipeline",
        &pl_textured,
        &shader,
        "vs_body",
        "fs_body",
        &[
            vertex_layout.clone(),
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<BodyInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &BODY_INSTANCE_ATTRS,
            },
        ],
        hdr_format,
        None,
        true,
        Some(wgpu::Face::Back),
    );
    let panel_pipeline = make_scene_pipeline(
        device,
        "panel_pipeline",
        &pl_plain,
        &shader,
        "vs_panel",
        "fs_panel",
        &[
            vertex_layout.clone(),
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PanelInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &PANEL_INSTANCE_ATTRS,
            },
        ],
        hdr_format,
        None,
        true,
        Some(wgpu::Face::Back),
    );
    let label_pipeline = make_scene_pipeline(
        device,
        "label_pipeline",
        &pl_textured,
        &shader,
        "vs_label",
        "fs_label",
        &[
            vertex_layout,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LabelInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &LABEL_INSTANCE_ATTRS,
            },
        ],
        hdr_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        false,
        None,
    );

    MeshResources {
        uniform_buffer,
        bg_scene,
        bg_earth,
        bg_moon,
        bg_labels,
        body_pipeline,
        panel_pipeline,
        label_pipeline,
        sphere_vb,
        sphere_ib,
        sphere_index_count,
        panel_vb,
        panel_ib,
        panel_index_count,
        quad_vb,
        quad_ib,
        quad_index_count,
        body_instances,
        panel_instances,
        label_instances,
    }
}

impl MeshResources {
    /// Refresh the uniform and instance buffers for this frame's scene pose.
    pub(crate) fn write_frame_data(
        &self,
        queue: &wgpu::Queue,
        scene: &SceneState,
        session: &Session,
        uniforms: &SceneUniforms,
    ) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        let bodies = [
            BodyInstance {
                model: (Mat4::from_rotation_y(scene.bodies.earth_spin)
                    * Mat4::from_scale(Vec3::splat(EARTH_RADIUS)))
                .to_cols_array_2d(),
            },
            BodyInstance {
                // Tidally locked: the same face keeps pointing at the planet.
                model: (Mat4::from_translation(scene.bodies.moon_position())
                    * Mat4::from_rotation_y(-scene.bodies.moon_angle)
                    * Mat4::from_scale(Vec3::splat(MOON_RADIUS)))
                .to_cols_array_2d(),
            },
        ];
        queue.write_buffer(&self.body_instances, 0, bytemuck::cast_slice(&bodies));

        let panels: Vec<PanelInstance> = scene
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let lift = if session.hovered() == Some(i) { 0.85 } else { 0.1 };
                PanelInstance {
                    model: item.model_matrix().to_cols_array_2d(),
                    tint: [0.93, 0.95, 1.0, lift],
                }
            })
            .collect();
        queue.write_buffer(&self.panel_instances, 0, bytemuck::cast_slice(&panels));

        let rows = scene.items.len().max(1) as f32;
        let label_w = LABEL_SCALE * 2.0;
        let label_h = label_w * (labels::LABEL_PX_H as f32 / labels::LABEL_PX_W as f32);
        let captions: Vec<LabelInstance> = scene
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let pos = item.position + Vec3::Y * LABEL_OFFSET_Y;
                // Only the hovered caption is visible; everyone else sits at zero.
                let alpha = session.label_alpha(i);
                LabelInstance {
                    pos_alpha: [pos.x, pos.y, pos.z, alpha],
                    uv_rect: [0.0, i as f32 / rows, 1.0, 1.0 / rows],
                    size_pad: [label_w, label_h, 0.0, 0.0],
                }
            })
            .collect();
        queue.write_buffer(&self.label_instances, 0, bytemuck::cast_slice(&captions));
    }
}
