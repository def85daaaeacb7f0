use glam::Vec2;
use web_sys as web;

/// Map client pixel coordinates to normalized device coordinates, +Y up,
/// each axis in `[-1, 1]`. A degenerate window maps to the center.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0 && height > 0.0) {
        return Vec2::ZERO;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Whether a section whose top edge is at `top_px` counts as pinned to the
/// top of the viewport.
#[inline]
pub fn is_pinned(top_px: f64, tolerance_px: f64) -> bool {
    top_px.abs() < tolerance_px
}

// ---------------- DOM helpers ----------------
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    client_to_ndc(ev.client_x() as f32, ev.client_y() as f32, w, h)
}

/// Pinned check against a live element; a missing section never pins.
#[inline]
pub fn section_pinned(section: Option<&web::Element>, tolerance_px: f64) -> bool {
    section
        .map(|s| is_pinned(s.get_bounding_client_rect().top(), tolerance_px))
        .unwrap_or(false)
}
