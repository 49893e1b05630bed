use crate::glyphs::CanvasGlyphSampler;
use crate::input;
use app_core::{Clock, InstantClock, Installation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub installation: Rc<RefCell<Installation>>,
    pub sampler: Rc<RefCell<CanvasGlyphSampler>>,
    pub clock: InstantClock,
}

/// Pointer events cover mouse, pen and touch alike. Down must land on the
/// canvas; up and cancel are taken from the window so a drag off-canvas
/// still ends the hold.
pub fn wire_input_handlers(w: InputWiring) {
    // pointerdown
    {
        let installation = w.installation.clone();
        let canvas = w.canvas.clone();
        let clock = w.clock;
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !input::is_primary(&ev) {
                return;
            }
            let pos = input::pointer_canvas_px(&ev, &canvas);
            if installation.borrow_mut().press(pos, clock.now_ms()) {
                log::info!("[pointer] hold start at ({:.0},{:.0})", pos.x, pos.y);
            }
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointercancel
    for name in ["pointerup", "pointercancel"] {
        let installation = w.installation.clone();
        let sampler = w.sampler.clone();
        let clock = w.clock;
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !input::is_primary(&ev) {
                return;
            }
            let released = installation
                .borrow_mut()
                .release(clock.now_ms(), &mut *sampler.borrow_mut());
            if let Some(held_ms) = released {
                log::info!("[pointer] released after {:.0}ms", held_ms);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // no long-press menu on touch screens
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
