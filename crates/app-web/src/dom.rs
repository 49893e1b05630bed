use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Detached canvas used as an offscreen layer.
pub fn create_canvas(document: &web::Document, width: u32, height: u32) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
    Ok(canvas)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Match the backing store to the CSS box. Returns the new size in pixels.
/// The installation works in CSS pixels, so no devicePixelRatio scaling here.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() as u32).max(1);
    let h_px = (rect.height() as u32).max(1);
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    Vec2::new(w_px as f32, h_px as f32)
}

/// Keep the canvas from scrolling, zooming or selecting under touch.
pub fn suppress_touch_gestures(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    let _ = style.set_property("touch-action", "none");
    let _ = style.set_property("user-select", "none");
    let _ = style.set_property("-webkit-user-select", "none");
}

/// Run `handler` on every window resize.
pub fn on_window_resize(mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
