use folio_core::nav::{ScrollDirection, Section};
use glam::Vec2;
use web_sys as web;

/// Map a pointer event's client coordinates into the canvas' backing-store
/// pixel space (CSS size and backing size differ by device pixel ratio).
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            (x_css / w) * canvas.width() as f32,
            (y_css / h) * canvas.height() as f32,
        )
    } else {
        Vec2::ZERO
    }
}

/// Wheel delta sign to paging direction; a zero delta pages nowhere.
#[inline]
pub fn wheel_direction(delta_y: f64) -> Option<ScrollDirection> {
    if delta_y > 0.0 {
        Some(ScrollDirection::Forward)
    } else if delta_y < 0.0 {
        Some(ScrollDirection::Backward)
    } else {
        None
    }
}

/// Parse a `data-section` attribute value back into a section.
#[inline]
pub fn section_from_id(id: &str) -> Option<Section> {
    Section::ALL.iter().copied().find(|s| s.id() == id)
}
