use super::helpers;
use wgpu;

/// Offscreen targets for the frame graph.
///
/// - `hdr_*` hold the lit scene in Rgba16Float at full resolution.
/// - `depth_*` is the scene depth buffer.
/// - `bloom_*` are half-resolution ping-pong buffers for bright-pass and blur.
/// - `ldr_*` holds the tonemapped composite that the FXAA pass reads; it uses
///   the swapchain format so the final blit is format-neutral.
pub(crate) struct RenderTargets {
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) ldr_tex: wgpu::Texture,
    pub(crate) ldr_view: wgpu::TextureView,
    ldr_format: wgpu::TextureFormat,
}

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const BLOOM_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

impl RenderTargets {
    pub(crate) fn create(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        ldr_format: wgpu::TextureFormat,
    ) -> Self {
        let (hdr_tex, hdr_view) = helpers::create_color_texture(
            device,
            "hdr_tex",
            width,
            height,
            HDR_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, "depth", width, height);
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        let (bloom_a, bloom_a_view) = helpers::create_color_texture(
            device,
            "bloom_a",
            bw,
            bh,
            BLOOM_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let (bloom_b, bloom_b_view) = helpers::create_color_texture(
            device,
            "bloom_b",
            bw,
            bh,
            BLOOM_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let (ldr_tex, ldr_view) = helpers::create_color_texture(
            device,
            "ldr_tex",
            width,
            height,
            ldr_format,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        Self {
            hdr_tex,
            hdr_view,
            depth_tex,
            depth_view,
            bloom_a,
            bloom_a_view,
            bloom_b,
            bloom_b_view,
            ldr_tex,
            ldr_view,
            ldr_format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::create(device, width, height, self.ldr_format);
    }
}
