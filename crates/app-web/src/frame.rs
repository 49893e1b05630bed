use crate::camera::Camera;
use crate::dom;
use crate::render::Canvas2dRenderer;
use app_core::{Clock, InstantClock, Installation, TickEvent};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub installation: Rc<RefCell<Installation>>,
    pub camera: Rc<RefCell<Option<Camera>>>,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Canvas2dRenderer,
    pub clock: InstantClock,
    pub resize_pending: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();

        if self.resize_pending.replace(false) {
            let size = dom::sync_canvas_backing_size(&self.canvas);
            self.renderer.resize(size);
            self.installation.borrow_mut().resize(size);
        }

        let capture = self.camera.borrow().as_ref().and_then(Camera::grab);
        let scene = {
            let mut inst = self.installation.borrow_mut();
            let report = inst.tick(now, capture.as_ref());
            for ev in &report.events {
                match ev {
                    TickEvent::Spawned { live } => {
                        log::debug!("[frame] motion={} live={}", report.motion_count, live)
                    }
                    TickEvent::ButtonPhase { from, to } => {
                        log::debug!("[frame] button {:?} -> {:?}", from, to)
                    }
                    _ => {}
                }
            }
            inst.scene(now)
        };

        if let Err(e) = self.renderer.draw(&scene) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
