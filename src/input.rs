use glam::Vec2;

/// Pointer position relative to an element's client rect, mapped to
/// normalized device coordinates (x right, y up, both -1..1).
///
/// A degenerate rect maps to the centre.
#[inline]
pub fn client_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let u = ((client.x - rect_origin.x) / rect_size.x).clamp(0.0, 1.0);
    let v = ((client.y - rect_origin.y) / rect_size.y).clamp(0.0, 1.0);
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

/// Wheel delta in pixels. `deltaMode` 1 is lines, 2 is pages.
#[inline]
pub fn wheel_delta_px(delta: f32, delta_mode: u32, page_px: f32) -> f32 {
    match delta_mode {
        1 => delta * LINE_HEIGHT_PX,
        2 => delta * page_px,
        _ => delta,
    }
}

pub const LINE_HEIGHT_PX: f32 = 16.0;

/// Canvas backing size for a CSS size and device pixel ratio, never zero.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let w = (css_w * dpr).max(0.0) as u32;
    let h = (css_h * dpr).max(0.0) as u32;
    (w.max(1), h.max(1))
}
