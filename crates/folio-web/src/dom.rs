use anyhow::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_document() -> Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok((window, document))
}

pub fn add_click_listener(
    document: &web::Document,
    id: &str,
    handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(id) else {
        return false;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let ok = el
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_ok();
    closure.forget();
    ok
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns true when the backing size actually changed.
pub fn sync_canvas_backing_size(window: &web::Window, canvas: &web::HtmlCanvasElement) -> bool {
    let dpr = window.device_pixel_ratio().max(0.5);
    let rect = canvas.get_bounding_client_rect();
    let w = (rect.width() * dpr).round().max(1.0) as u32;
    let h = (rect.height() * dpr).round().max(1.0) as u32;
    let changed = canvas.width() != w || canvas.height() != h;
    if changed {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    changed
}
