use folio_core::{px_to_ndc, screen_ray, CameraRig, Ray};
use glam::Vec2;
use web_sys as web;

/// Last pointer position in canvas backing pixels. `seen` stays false until
/// the first pointermove so the frame loop never casts a ray at (0, 0).
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub seen: bool,
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// World-space ray under a canvas pixel for the camera's live pose.
#[inline]
pub fn pointer_ray(canvas: &web::HtmlCanvasElement, rig: &CameraRig, sx: f32, sy: f32) -> Ray {
    let (ndc_x, ndc_y) = px_to_ndc(
        sx,
        sy,
        canvas.width().max(1) as f32,
        canvas.height().max(1) as f32,
    );
    screen_ray(rig, ndc_x, ndc_y)
}
