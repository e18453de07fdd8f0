// Pure layout helpers shared by the DOM wiring; no web-sys types here so the
// host tests can include this file directly.

/// Backing-store size for a full-viewport canvas.
///
/// With `pixel_ratio == 1.0` this is exactly the window's inner size.
#[inline]
pub fn canvas_size_for_window(inner_width: f64, inner_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let w = (inner_width.max(0.0) * ratio).round() as u32;
    let h = (inner_height.max(0.0) * ratio).round() as u32;
    (w, h)
}

/// Client (CSS px) pointer position to canvas backing-store pixels.
#[inline]
pub fn client_to_canvas(client_x: f64, client_y: f64, pixel_ratio: f64) -> [f32; 2] {
    [
        (client_x * pixel_ratio) as f32,
        (client_y * pixel_ratio) as f32,
    ]
}

/// Section extent in document coordinates from a client rect and scroll offset.
#[inline]
pub fn document_bounds(rect_top: f64, rect_bottom: f64, scroll_y: f64) -> (f32, f32) {
    ((rect_top + scroll_y) as f32, (rect_bottom + scroll_y) as f32)
}

pub fn planet_transform(parallax_offset: f32) -> String {
    format!("translate(-50%, -50%) translateY({:.1}px)", -parallax_offset)
}

pub fn cursor_transform(x: f32, y: f32) -> String {
    format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", x, y)
}
