use anyhow::Result;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::assets::ImageRgba;

/// All labels share one bitmap size so they stack into a single atlas.
pub const LABEL_PX_W: u32 = 256;
pub const LABEL_PX_H: u32 = 64;

fn js_err(e: impl core::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Transparent stand-in when rasterization fails; the quad simply stays
/// invisible instead of showing garbage.
pub fn blank_label() -> ImageRgba {
    ImageRgba {
        rgba: vec![0u8; (LABEL_PX_W * LABEL_PX_H * 4) as usize],
        width: LABEL_PX_W,
        height: LABEL_PX_H,
    }
}

/// Draw a panel caption into an offscreen 2D canvas and read the pixels back.
/// Two fills: a soft glow pass underneath, then the crisp text on top.
pub fn rasterize_label(document: &web::Document, text: &str) -> Result<ImageRgba> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(js_err)?;
    canvas.set_width(LABEL_PX_W);
    canvas.set_height(LABEL_PX_H);

    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context for labels"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(js_err)?;

    let cx = LABEL_PX_W as f64 / 2.0;
    let cy = LABEL_PX_H as f64 / 2.0 + 2.0;
    ctx.set_font("600 34px 'Segoe UI', system-ui, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    // Captions longer than the bitmap get squeezed rather than clipped.
    let metrics = ctx.measure_text(text).map_err(js_err)?;
    let max_w = LABEL_PX_W as f64 - 24.0;
    if metrics.width() > max_w {
        _ = ctx.scale(max_w / metrics.width(), 1.0);
    }
    let cx = if metrics.width() > max_w {
        cx * metrics.width() / max_w
    } else {
        cx
    };

    ctx.set_shadow_color("rgba(120, 180, 255, 0.9)");
    ctx.set_shadow_blur(14.0);
    ctx.set_fill_style_str("rgba(170, 210, 255, 0.85)");
    ctx.fill_text(text, cx, cy).map_err(js_err)?;

    ctx.set_shadow_blur(0.0);
    ctx.set_fill_style_str("#f2f7ff");
    ctx.fill_text(text, cx, cy).map_err(js_err)?;

    let data = ctx
        .get_image_data(0.0, 0.0, LABEL_PX_W as f64, LABEL_PX_H as f64)
        .map_err(js_err)?;
    Ok(ImageRgba {
        rgba: data.data().0,
        width: LABEL_PX_W,
        height: LABEL_PX_H,
    })
}
