//! The simulation context owned by a frontend's frame loop.
//!
//! Everything the installation mutates lives in [`Installation`]: the motion
//! accumulator, the blob set, the presence button, the text reveal and the
//! background mesh. A frontend samples its clock once per frame and calls
//! [`Installation::tick`]; pointer edges arrive through [`Installation::press`]
//! and [`Installation::release`] between ticks. Nothing here blocks, and
//! nothing here is shared across threads.

use crate::blob::{blob_alpha, BlobField};
use crate::button::{ButtonPhase, PresenceButton};
use crate::color::{with_alpha, BLACK, WHITE};
use crate::config::Tuning;
use crate::constants::{GRAIN_MAX_ALPHA, GRAIN_PIXELS_PER_PARTICLE};
use crate::error::ConfigError;
use crate::mesh::Mesh;
use crate::motion::{MotionEnergy, MotionEstimator, MotionFrame};
use crate::noise::SmoothNoise;
use crate::scene::{grain_count, Circle, GrainSpeck, Scene};
use crate::text::{reveal_duration, GlyphSampler, TextReveal};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickEvent {
    Spawned { live: usize },
    FadeStarted(usize),
    BlobsRemoved(usize),
    ButtonPhase { from: ButtonPhase, to: ButtonPhase },
    RevealFinished,
}

#[derive(Clone, Debug, Default)]
pub struct TickReport {
    pub motion_count: u32,
    pub energy: f32,
    pub events: SmallVec<[TickEvent; 4]>,
}

impl TickReport {
    pub fn spawned(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::Spawned { .. }))
    }
}

pub struct Installation {
    pub tuning: Tuning,
    pub canvas: Vec2,
    pub tick: u64,
    pub estimator: MotionEstimator,
    pub energy: MotionEnergy,
    pub blobs: BlobField,
    pub button: PresenceButton,
    pub text: TextReveal,
    pub mesh: Mesh,
    noise: SmoothNoise,
    rng: StdRng,
    grain_rng: StdRng,
    last_phase: ButtonPhase,
}

impl Installation {
    pub fn new(tuning: Tuning, canvas: Vec2) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let mut rng = StdRng::seed_from_u64(tuning.seed);
        // Grain draws its own stream so rendering never perturbs spawn randomness.
        let grain_rng = StdRng::seed_from_u64(tuning.seed ^ 0x9E37_79B9_7F4A_7C15);
        let noise = SmoothNoise::from_rng(&mut rng);
        let thresholds = tuning.thresholds();
        let mesh = Mesh::new(&mut rng, canvas, &tuning.mesh);
        let button = PresenceButton::new(PresenceButton::home_position(canvas), &tuning.button);
        log::info!(
            "[installation] canvas={}x{} pixel_threshold={:.1} activation={:.1}",
            canvas.x,
            canvas.y,
            thresholds.sensitivity,
            thresholds.activation
        );
        Ok(Self {
            estimator: MotionEstimator::new(thresholds.sensitivity, tuning.motion.stride),
            energy: MotionEnergy::new(&tuning.motion),
            blobs: BlobField::default(),
            text: TextReveal::default(),
            tick: 0,
            canvas,
            mesh,
            button,
            noise,
            rng,
            grain_rng,
            last_phase: ButtonPhase::Hidden,
            tuning,
        })
    }

    pub fn noise(&self) -> &SmoothNoise {
        &self.noise
    }

    /// One frame: estimate motion from the latest capture (if any), then step.
    pub fn tick(&mut self, now_ms: f64, frame: Option<&MotionFrame>) -> TickReport {
        let motion_count = self.estimator.estimate(frame);
        self.step(now_ms, motion_count)
    }

    /// One frame from an already-computed motion count.
    pub fn step(&mut self, now_ms: f64, motion_count: u32) -> TickReport {
        self.tick += 1;
        let mut report = TickReport {
            motion_count,
            ..Default::default()
        };

        self.energy.accumulate(motion_count);
        let blob_tuning = &self.tuning.blobs;
        if self.energy.should_spawn(
            now_ms,
            blob_tuning.spawn_cooldown_ms,
            self.blobs.len(),
            blob_tuning.max_blobs,
        ) {
            self.blobs
                .spawn(&mut self.rng, self.canvas, now_ms, blob_tuning);
            self.energy.record_spawn(now_ms);
            self.button.activate(now_ms);
            report.events.push(TickEvent::Spawned {
                live: self.blobs.len(),
            });
        }
        report.energy = self.energy.energy;

        self.mesh.update(self.tick, &self.noise, &self.tuning.mesh);

        let fading = self
            .blobs
            .update(now_ms, self.button.is_visible, self.tick, &self.tuning.blobs);
        if fading > 0 {
            report.events.push(TickEvent::FadeStarted(fading));
        }

        self.button.update(now_ms);
        let phase = self.button.phase();
        if phase != self.last_phase {
            report.events.push(TickEvent::ButtonPhase {
                from: self.last_phase,
                to: phase,
            });
            self.last_phase = phase;
        }

        if self.text.update(now_ms) {
            report.events.push(TickEvent::RevealFinished);
        }

        let removed = self
            .blobs
            .prune(now_ms, self.canvas, self.tuning.blobs.fade_out_ms);
        if removed > 0 {
            report.events.push(TickEvent::BlobsRemoved(removed));
        }
        report
    }

    /// Pointer down at `point` (canvas pixels). A qualifying press starts a
    /// hold and clears any text on screen; anything else is ignored.
    pub fn press(&mut self, point: Vec2, now_ms: f64) -> bool {
        if !self.button.press(point, now_ms) {
            return false;
        }
        self.text.clear();
        true
    }

    /// Pointer up. Ends a hold, if any, and starts a reveal paced by the
    /// clamped hold duration, which is returned.
    pub fn release(&mut self, now_ms: f64, sampler: &mut dyn GlyphSampler) -> Option<f64> {
        let held_ms = self.button.release(now_ms)?;
        let Some(message) = self.tuning.text.messages.choose(&mut self.rng).cloned() else {
            log::warn!("[text] no messages configured");
            return Some(held_ms);
        };
        let outline = sampler.sample(&message, self.tuning.text.font_size);
        let points = outline.placed(self.canvas);
        let duration = reveal_duration(
            held_ms,
            self.tuning.button.max_hold_ms,
            self.tuning.text.duration_range_ms,
        );
        self.text.start(message, points, duration, now_ms);
        Some(held_ms)
    }

    /// Hard reset of everything laid out against the canvas. Live blobs keep
    /// flying and a hold in progress survives onto the rebuilt button, so the
    /// next release still reveals text.
    pub fn resize(&mut self, canvas: Vec2) {
        log::info!("[installation] resize to {}x{}", canvas.x, canvas.y);
        self.canvas = canvas;
        self.mesh = Mesh::new(&mut self.rng, canvas, &self.tuning.mesh);
        let hold = self.button.hold.take();
        self.button = PresenceButton::new(PresenceButton::home_position(canvas), &self.tuning.button);
        self.button.hold = hold;
        self.last_phase = self.button.phase();
        self.text.clear();
    }

    /// Display list for the current state at `now_ms`.
    pub fn scene(&mut self, now_ms: f64) -> Scene {
        let t = &self.tuning;
        let mut scene = Scene {
            canvas: self.canvas,
            text_glow_blur: t.text.glow_blur,
            ..Default::default()
        };

        scene.mesh = self
            .mesh
            .points
            .iter()
            .map(|p| Circle {
                center: p.position,
                diameter: self.mesh.circle_diameter,
                color: with_alpha(p.color, 1.0),
                blur: t.mesh.blur,
            })
            .collect();

        for blob in &self.blobs.blobs {
            let alpha = blob_alpha(blob, now_ms, &t.blobs);
            if alpha <= 0.0 {
                continue;
            }
            let color = t.presence_color.to_rgba(alpha);
            for blur in [t.blobs.glow_blur, t.blobs.core_blur] {
                scene.glow.push(Circle {
                    center: blob.position,
                    diameter: blob.max_size,
                    color,
                    blur,
                });
            }
        }

        if self.button.is_drawable() {
            let color = with_alpha(WHITE, self.button.alpha.current);
            for blur in [self.button.glow.current, t.button.core_blur] {
                scene.glow.push(Circle {
                    center: self.button.position,
                    diameter: self.button.size.current,
                    color,
                    blur,
                });
            }
        }

        scene.text = self
            .text
            .dots(now_ms, &self.noise, &t.text)
            .into_iter()
            .map(|d| Circle {
                center: d.position,
                diameter: d.diameter,
                color: with_alpha(WHITE, t.text.opacity),
                blur: 0.0,
            })
            .collect();

        let specks = grain_count(self.canvas, t.grain_amount, GRAIN_PIXELS_PER_PARTICLE);
        let grain_alpha = t.grain_amount.clamp(0.0, 1.0) * GRAIN_MAX_ALPHA;
        scene.grain.reserve(specks);
        for _ in 0..specks {
            let position = Vec2::new(
                self.grain_rng.gen::<f32>() * self.canvas.x,
                self.grain_rng.gen::<f32>() * self.canvas.y,
            );
            let rgb = if self.grain_rng.gen_bool(0.5) { WHITE } else { BLACK };
            scene.grain.push(GrainSpeck {
                position,
                color: with_alpha(rgb, grain_alpha),
            });
        }
        scene
    }
}
