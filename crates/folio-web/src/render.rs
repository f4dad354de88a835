use folio_core::{SceneState, Session};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod meshes;
mod post;
mod sky;
mod targets;

use meshes::{MeshResources, SceneUniforms};
use sky::{SkyResources, SkyUniforms};
use targets::RenderTargets;

use crate::assets::SceneAssets;

// Shaders bundled as string constants
pub static SKY_WGSL: &str = include_str!("../shaders/sky.wgsl");
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

// Key light for the bodies and panels; roughly over the camera's left shoulder
// at the idle anchor.
const SUN_DIR: Vec3 = Vec3::new(-0.55, 0.35, 0.76);

const BLOOM_STRENGTH: f32 = 0.85;
const BLOOM_THRESHOLD: f32 = 1.0;
const ABERRATION: f32 = 0.0035;
const VIGNETTE: f32 = 0.22;
const EXPOSURE: f32 = 1.1;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2], // swapchain pixels; blur passes halve it themselves
    time: f32,
    bloom_strength: f32,
    threshold: f32,
    aberration: f32,
    vignette: f32,
    exposure: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,

    sky: SkyResources,
    meshes: MeshResources,
    post: post::PostResources,
    bgs: post::PostBindGroups,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        assets: &SceneAssets,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::create(&device, width, height, format);

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let sky = sky::create_sky_resources(&device, targets::HDR_FORMAT);
        let meshes = meshes::create_mesh_resources(
            &device,
            &queue,
            targets::HDR_FORMAT,
            &linear_sampler,
            assets,
        );

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });
        let post = post::create_post_resources(
            &device,
            &post_shader,
            targets::BLOOM_FORMAT,
            format,
            format,
        );
        let bgs = post::rebuild_bind_groups(&device, &post, &linear_sampler, &targets);

        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            sky,
            meshes,
            post,
            bgs,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.004,
                g: 0.005,
                b: 0.012,
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and dependent bind groups
            self.targets.recreate(&self.device, width, height);
            self.bgs = post::rebuild_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets,
            );
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        scene: &SceneState,
        session: &Session,
    ) -> Result<(), wgpu::SurfaceError> {
        self.resize_if_needed(self.width, self.height);
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let rig = &session.rig;
        let view_proj = rig.view_proj();
        let forward = rig.forward();
        let right = forward.cross(rig.up).normalize_or_zero();
        let up = right.cross(forward);
        let sun = SUN_DIR.normalize();

        self.queue.write_buffer(
            &self.sky.uniform_buffer,
            0,
            bytemuck::bytes_of(&SkyUniforms {
                inv_view_proj: view_proj.inverse().to_cols_array_2d(),
                resolution: [self.width as f32, self.height as f32],
                time: self.time_accum,
                _pad: 0.0,
            }),
        );
        self.meshes.write_frame_data(
            &self.queue,
            scene,
            session,
            &SceneUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                camera_right: right.extend(0.0).to_array(),
                camera_up: up.extend(0.0).to_array(),
                camera_pos: rig.eye.extend(1.0).to_array(),
                sun_dir: sun.extend(0.0).to_array(),
                time: self.time_accum,
                _pad: [0.0; 3],
            },
        );

        // Pass 1: sky, bodies, panels, captions into the HDR target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.sky.pipeline);
            rpass.set_bind_group(0, &self.sky.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            let n = scene.items.len() as u32;

            rpass.set_pipeline(&self.meshes.body_pipeline);
            rpass.set_bind_group(0, &self.meshes.bg_scene, &[]);
            rpass.set_vertex_buffer(0, self.meshes.sphere_vb.slice(..));
            rpass.set_vertex_buffer(1, self.meshes.body_instances.slice(..));
            rpass.set_index_buffer(self.meshes.sphere_ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_bind_group(1, &self.meshes.bg_earth, &[]);
            rpass.draw_indexed(0..self.meshes.sphere_index_count, 0, 0..1);
            rpass.set_bind_group(1, &self.meshes.bg_moon, &[]);
            rpass.draw_indexed(0..self.meshes.sphere_index_count, 0, 1..2);

            rpass.set_pipeline(&self.meshes.panel_pipeline);
            rpass.set_bind_group(0, &self.meshes.bg_scene, &[]);
            rpass.set_vertex_buffer(0, self.meshes.panel_vb.slice(..));
            rpass.set_vertex_buffer(1, self.meshes.panel_instances.slice(..));
            rpass.set_index_buffer(self.meshes.panel_ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.meshes.panel_index_count, 0, 0..n);

            rpass.set_pipeline(&self.meshes.label_pipeline);
            rpass.set_bind_group(0, &self.meshes.bg_scene, &[]);
            rpass.set_bind_group(1, &self.meshes.bg_labels, &[]);
            rpass.set_vertex_buffer(0, self.meshes.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.meshes.label_instances.slice(..));
            rpass.set_index_buffer(self.meshes.quad_ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.meshes.quad_index_count, 0, 0..n);
        }

        // One uniform write serves every post pass this frame.
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            &PostUniforms {
                resolution: [self.width as f32, self.height as f32],
                time: self.time_accum,
                bloom_strength: BLOOM_STRENGTH,
                threshold: BLOOM_THRESHOLD,
                aberration: ABERRATION,
                vignette: VIGNETTE,
                exposure: EXPOSURE,
            },
        );

        // Pass 2: bright pass → bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bgs.bg_hdr,
            None,
        );

        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_h_pipeline,
            &self.bgs.bg_from_bloom_a,
            None,
        );

        // Pass 4: blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_v_pipeline,
            &self.bgs.bg_from_bloom_b,
            None,
        );

        // Pass 5: composite HDR + bloom, aberration, vignette, tonemap → LDR
        post::blit(
            &mut encoder,
            "composite",
            &self.targets.ldr_view,
            wgpu::Color::BLACK,
            &self.post.composite_pipeline,
            &self.bgs.bg_hdr,
            Some(&self.bgs.bg_bloom_a_only),
        );

        // Pass 6: FXAA → swapchain
        post::blit(
            &mut encoder,
            "fxaa",
            &view,
            wgpu::Color::BLACK,
            &self.post.fxaa_pipeline,
            &self.bgs.bg_ldr,
            None,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
