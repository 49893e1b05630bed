#![cfg(target_arch = "wasm32")]
mod camera;
mod dom;
mod events;
mod frame;
mod glyphs;
mod input;
mod render;

use anyhow::anyhow;
use app_core::{InstantClock, Installation, Tuning};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

const CANVAS_ID: &str = "app-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    dom::suppress_touch_gestures(&canvas);
    let size = dom::sync_canvas_backing_size(&canvas);

    let mut tuning = Tuning::default();
    // a fresh arrangement on every page load
    tuning.seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let (capture_w, capture_h) = (tuning.motion.capture_width, tuning.motion.capture_height);
    let sample_step = tuning.text.sample_step;
    let installation = Rc::new(RefCell::new(Installation::new(tuning, size)?));

    let renderer = render::Canvas2dRenderer::new(&document, &canvas, size)?;
    let sampler = Rc::new(RefCell::new(glyphs::CanvasGlyphSampler::new(
        &document,
        sample_step,
    )?));
    let clock = InstantClock::new();

    let resize_pending = Rc::new(Cell::new(false));
    {
        let flag = resize_pending.clone();
        dom::on_window_resize(move || flag.set(true));
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        installation: installation.clone(),
        sampler,
        clock,
    });

    let camera = Rc::new(RefCell::new(None));
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        installation,
        camera: camera.clone(),
        canvas,
        renderer,
        clock,
        resize_pending,
    })));

    // The loop is already drawing; motion input joins once permission is granted.
    match camera::Camera::start(&document, capture_w, capture_h).await {
        Ok(cam) => *camera.borrow_mut() = Some(cam),
        Err(e) => log::warn!("[camera] unavailable, running without motion: {:?}", e),
    }
    Ok(())
}
