mod capture;
mod glyphs;
mod gpu;
mod touch;

use app_core::{Clock, InstantClock, Installation, TickEvent, Tuning};
use capture::PointerCapture;
use glam::Vec2;
use glyphs::CosmicGlyphSampler;
use gpu::GpuState;
use touch::PrimaryTouch;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

/// Everything the event loop mutates besides the GPU.
struct App {
    installation: Installation,
    sampler: CosmicGlyphSampler,
    capture: PointerCapture,
    clock: InstantClock,
    cursor: Option<Vec2>,
    touch: PrimaryTouch,
}

impl App {
    fn new(size: Vec2) -> anyhow::Result<Self> {
        let mut tuning = Tuning::default();
        if let Ok(elapsed) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            tuning.seed = elapsed.as_nanos() as u64;
        }
        let capture = PointerCapture::new(tuning.motion.capture_width, tuning.motion.capture_height);
        let sampler = CosmicGlyphSampler::new(tuning.text.sample_step);
        Ok(Self {
            installation: Installation::new(tuning, size)?,
            sampler,
            capture,
            clock: InstantClock::new(),
            cursor: None,
            touch: PrimaryTouch::default(),
        })
    }

    fn press(&mut self, at: Vec2) {
        if self.installation.press(at, self.clock.now_ms()) {
            log::info!("[pointer] hold start at ({:.0},{:.0})", at.x, at.y);
        }
    }

    fn release(&mut self) {
        let now = self.clock.now_ms();
        if let Some(held_ms) = self.installation.release(now, &mut self.sampler) {
            log::info!("[pointer] released after {:.0}ms", held_ms);
        }
    }

    fn frame(&mut self) -> app_core::Scene {
        let now = self.clock.now_ms();
        let frame = self.capture.paint(self.cursor, self.installation.canvas);
        let report = self.installation.tick(now, Some(&frame));
        for ev in &report.events {
            if let TickEvent::ButtonPhase { from, to } = ev {
                log::debug!("[frame] button {:?} -> {:?}", from, to);
            }
        }
        self.installation.scene(now)
    }
}

fn to_vec2(size: winit::dpi::PhysicalSize<u32>) -> Vec2 {
    Vec2::new(size.width as f32, size.height as f32)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("glowfield")
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut app = App::new(to_vec2(window.inner_size()))?;
    log::info!("[native] no camera; the cursor paints the capture frame");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event: key, .. }
                if key.state == ElementState::Pressed
                    && key.logical_key == Key::Named(NamedKey::Escape) =>
            {
                elwt.exit()
            }
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                if size.width > 0 && size.height > 0 {
                    app.installation.resize(to_vec2(size));
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => app.cursor = None,
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    if let Some(at) = app.cursor {
                        app.press(at);
                    }
                }
                ElementState::Released => app.release(),
            },
            WindowEvent::Touch(touch) => {
                let at = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started => {
                        if app.touch.start(touch.id) {
                            app.cursor = Some(at);
                            app.press(at);
                        }
                    }
                    TouchPhase::Moved => {
                        if app.touch.is_primary(touch.id) {
                            app.cursor = Some(at);
                        }
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        if app.touch.end(touch.id) {
                            app.release();
                        }
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let scene = app.frame();
            match gpu.render(&scene) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
