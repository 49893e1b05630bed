//! Blob records and the free functions that move, fade and retire them.
//!
//! A blob flies in from one canvas edge, drifts on an elliptical wander, and
//! pulses once in alpha over its lifespan. When the presence button goes
//! hidden every live blob starts a one-shot fade and is removed once it ends.

use crate::config::BlobTuning;
use crate::ease::lerp;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Bottom,
    Top,
    Right,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Top, Edge::Right, Edge::Left];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Edge {
        Edge::ALL[rng.gen_range(0..Edge::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlobStage {
    Growing,
    Fading,
    Dead,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub birth_ms: f64,
    pub lifespan_ms: f64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub phase: f32,
    pub max_size: f32,
    pub edge: Edge,
    /// Set once, on the first tick the presence button is hidden.
    pub fade_start_ms: Option<f64>,
}

impl Blob {
    #[inline]
    pub fn is_fading(&self) -> bool {
        self.fade_start_ms.is_some()
    }
}

#[inline]
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>()
}

#[inline]
fn between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lerp(lo, hi, unit(rng))
}

/// Place a new blob just outside a random edge, heading broadly inward.
pub fn spawn_blob<R: Rng + ?Sized>(
    rng: &mut R,
    canvas: Vec2,
    now_ms: f64,
    tuning: &BlobTuning,
) -> Blob {
    let edge = Edge::random(rng);
    let phase = between(rng, 0.0, std::f32::consts::TAU);
    let max_size = between(
        rng,
        canvas.x * tuning.size_range.0,
        canvas.x * tuning.size_range.1,
    );
    let offset = max_size / 2.0;
    let along_x = unit(rng) * canvas.x;
    let along_y = unit(rng) * canvas.y;
    let lateral = between(rng, -0.5, 0.5);
    let inward = between(rng, 0.5, 1.0);

    let (position, velocity) = match edge {
        Edge::Bottom => (
            Vec2::new(along_x, canvas.y + offset),
            Vec2::new(lateral, -inward),
        ),
        Edge::Top => (Vec2::new(along_x, -offset), Vec2::new(lateral, inward)),
        Edge::Right => (
            Vec2::new(canvas.x + offset, along_y),
            Vec2::new(-inward, lateral),
        ),
        Edge::Left => (Vec2::new(-offset, along_y), Vec2::new(inward, lateral)),
    };

    Blob {
        birth_ms: now_ms,
        lifespan_ms: tuning.lifespan_ms,
        position,
        velocity: velocity * tuning.speed_multiplier,
        phase,
        max_size,
        edge,
        fade_start_ms: None,
    }
}

/// Advance one tick. Returns true on the tick the blob starts fading.
pub fn update_blob(
    blob: &mut Blob,
    now_ms: f64,
    button_visible: bool,
    tick: u64,
    tuning: &BlobTuning,
) -> bool {
    let mut started_fading = false;
    if !blob.is_fading() && !button_visible {
        blob.fade_start_ms = Some(now_ms);
        started_fading = true;
    }

    let angle = blob.phase + tick as f32 * tuning.wander_rate;
    let wander = Vec2::new(angle.sin(), angle.cos()) * tuning.wander_amplitude;
    blob.position += blob.velocity + wander;
    started_fading
}

/// Lifespan envelope times the fade factor. Values at or below zero mean
/// "draw nothing" but do not retire the blob.
pub fn blob_alpha(blob: &Blob, now_ms: f64, tuning: &BlobTuning) -> f32 {
    let life = ((now_ms - blob.birth_ms) / blob.lifespan_ms) as f32;
    let mut alpha = (life * std::f32::consts::PI).sin() * tuning.peak_alpha;
    if let Some(fade_start) = blob.fade_start_ms {
        let fade = ((now_ms - fade_start) / tuning.fade_out_ms) as f32;
        alpha *= 1.0 - fade.clamp(0.0, 1.0);
    }
    alpha
}

pub fn blob_stage(blob: &Blob, now_ms: f64, canvas: Vec2, fade_out_ms: f64) -> BlobStage {
    if let Some(fade_start) = blob.fade_start_ms {
        return if now_ms > fade_start + fade_out_ms {
            BlobStage::Dead
        } else {
            BlobStage::Fading
        };
    }
    let margin = blob.max_size;
    let p = blob.position;
    if p.x < -margin || p.x > canvas.x + margin || p.y < -margin || p.y > canvas.y + margin {
        BlobStage::Dead
    } else {
        BlobStage::Growing
    }
}

#[inline]
pub fn is_dead(blob: &Blob, now_ms: f64, canvas: Vec2, fade_out_ms: f64) -> bool {
    blob_stage(blob, now_ms, canvas, fade_out_ms) == BlobStage::Dead
}

/// The live blob set, stored contiguously.
#[derive(Clone, Debug, Default)]
pub struct BlobField {
    pub blobs: Vec<Blob>,
}

impl BlobField {
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        canvas: Vec2,
        now_ms: f64,
        tuning: &BlobTuning,
    ) -> &Blob {
        let blob = spawn_blob(rng, canvas, now_ms, tuning);
        log::info!(
            "[spawn] blob from {:?} at ({:.0},{:.0}) size={:.0} live={}",
            blob.edge,
            blob.position.x,
            blob.position.y,
            blob.max_size,
            self.blobs.len() + 1
        );
        self.blobs.push(blob);
        &self.blobs[self.blobs.len() - 1]
    }

    /// Move every blob; returns how many started fading this tick.
    pub fn update(
        &mut self,
        now_ms: f64,
        button_visible: bool,
        tick: u64,
        tuning: &BlobTuning,
    ) -> usize {
        let mut started = 0;
        for blob in &mut self.blobs {
            if update_blob(blob, now_ms, button_visible, tick, tuning) {
                started += 1;
            }
        }
        if started > 0 {
            log::debug!("[blobs] {} started fading", started);
        }
        started
    }

    /// Drop dead blobs; returns how many were removed.
    pub fn prune(&mut self, now_ms: f64, canvas: Vec2, fade_out_ms: f64) -> usize {
        let before = self.blobs.len();
        self.blobs.retain(|b| !is_dead(b, now_ms, canvas, fade_out_ms));
        let removed = before - self.blobs.len();
        if removed > 0 {
            log::debug!("[blobs] removed {} live={}", removed, self.blobs.len());
        }
        removed
    }
}
