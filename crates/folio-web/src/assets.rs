use anyhow::Result;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::dom;
use crate::labels;

/// Decoded RGBA8 pixels, tightly packed row-major.
pub struct ImageRgba {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl ImageRgba {
    /// Tiny flat-colour stand-in for a texture that failed to arrive.
    pub fn solid(r: u8, g: u8, b: u8) -> Self {
        let (width, height) = (4u32, 4u32);
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
        ImageRgba {
            rgba,
            width,
            height,
        }
    }
}

/// Everything the renderer and the hover chime need before the first frame.
pub struct SceneAssets {
    pub earth: ImageRgba,
    pub moon: ImageRgba,
    pub labels: Vec<ImageRgba>,
    pub chime: Option<web::AudioBuffer>,
}

/// Resolve an asset name against the deploy-time base path.
pub fn asset_url(name: &str) -> String {
    let base = option_env!("FOLIO_ASSET_BASE").unwrap_or("assets");
    format!("{}/{}", base.trim_end_matches('/'), name)
}

fn js_err(e: impl core::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

async fn fetch_response(window: &web::Window, url: &str) -> Result<web::Response> {
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    Ok(resp)
}

/// Fetch and decode an image through `createImageBitmap` plus a scratch 2D
/// canvas. The browser does the PNG work, so the wasm binary ships no decoder.
pub async fn fetch_image_rgba(url: &str) -> Result<ImageRgba> {
    let (window, document) = dom::window_document()?;
    let resp = fetch_response(&window, url).await?;
    let blob = JsFuture::from(resp.blob().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let blob: web::Blob = blob.dyn_into().map_err(js_err)?;
    let bitmap = JsFuture::from(window.create_image_bitmap_with_blob(&blob).map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let bitmap: web::ImageBitmap = bitmap.dyn_into().map_err(js_err)?;
    let (width, height) = (bitmap.width().max(1), bitmap.height().max(1));

    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(js_err)?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context for image decode"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(js_err)?;
    ctx.draw_image_with_image_bitmap(&bitmap, 0.0, 0.0)
        .map_err(js_err)?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_err)?;
    Ok(ImageRgba {
        rgba: data.data().0,
        width,
        height,
    })
}

pub async fn fetch_audio_buffer(
    audio_ctx: &web::AudioContext,
    url: &str,
) -> Result<web::AudioBuffer> {
    let (window, _) = dom::window_document()?;
    let resp = fetch_response(&window, url).await?;
    let raw = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let raw: js_sys::ArrayBuffer = raw.dyn_into().map_err(js_err)?;
    let decoded = JsFuture::from(audio_ctx.decode_audio_data(&raw).map_err(js_err)?)
        .await
        .map_err(js_err)?;
    decoded.dyn_into::<web::AudioBuffer>().map_err(js_err)
}

async fn image_or_fallback(name: &str, fallback: ImageRgba) -> ImageRgba {
    let url = asset_url(name);
    match fetch_image_rgba(&url).await {
        Ok(img) => {
            log::info!("[assets] loaded {} ({}x{})", url, img.width, img.height);
            img
        }
        Err(e) => {
            log::warn!("[assets] {} unavailable, using flat colour: {}", url, e);
            fallback
        }
    }
}

/// Load every startup asset, degrading politely: a missing texture becomes a
/// flat colour and a missing chime stays silent.
pub async fn load_scene_assets(
    document: &web::Document,
    audio_ctx: &web::AudioContext,
    label_texts: &[&str],
) -> SceneAssets {
    let earth = image_or_fallback("earth_day.png", ImageRgba::solid(24, 58, 112)).await;
    let moon = image_or_fallback("moon.png", ImageRgba::solid(142, 140, 133)).await;

    let labels = label_texts
        .iter()
        .map(|text| match labels::rasterize_label(document, text) {
            Ok(img) => img,
            Err(e) => {
                log::warn!("[assets] label `{}` failed to rasterize: {}", text, e);
                labels::blank_label()
            }
        })
        .collect();

    let chime_url = asset_url("hover.wav");
    let chime = match fetch_audio_buffer(audio_ctx, &chime_url).await {
        Ok(buf) => {
            log::info!("[assets] loaded {} ({:.2}s)", chime_url, buf.duration());
            Some(buf)
        }
        Err(e) => {
            log::warn!("[assets] {} unavailable, hover stays silent: {}", chime_url, e);
            None
        }
    };

    SceneAssets {
        earth,
        moon,
        labels,
        chime,
    }
}
