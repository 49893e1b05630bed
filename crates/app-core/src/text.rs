//! Progressive text reveal: outline points of a message are disclosed in order
//! over a duration set by how long the presence button was held.

use crate::config::TextTuning;
use crate::ease::{lerp, map_range};
use crate::noise::SmoothNoise;
use glam::Vec2;

/// Ordered outline points for one message, relative to the top-left of its
/// bounding box, plus that box's size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextOutline {
    pub points: Vec<Vec2>,
    pub size: Vec2,
}

impl TextOutline {
    /// Canvas-space points with the text box centred horizontally and at one
    /// third of the canvas height.
    pub fn placed(&self, canvas: Vec2) -> Vec<Vec2> {
        let origin = Vec2::new(canvas.x / 2.0, canvas.y / 3.0) - self.size / 2.0;
        self.points.iter().map(|p| *p + origin).collect()
    }
}

/// Text shaping collaborator supplied by each frontend.
pub trait GlyphSampler {
    fn sample(&mut self, message: &str, font_size: f32) -> TextOutline;
}

/// Map a clamped hold duration onto the reveal duration bounds.
pub fn reveal_duration(hold_ms: f64, max_hold_ms: f64, bounds_ms: (f64, f64)) -> f64 {
    let hold = hold_ms.clamp(0.0, max_hold_ms);
    map_range(hold, 0.0, max_hold_ms, bounds_ms.0, bounds_ms.1)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextDot {
    pub position: Vec2,
    pub diameter: f32,
}

#[derive(Clone, Debug, Default)]
pub struct TextReveal {
    pub message: Option<String>,
    pub points: Vec<Vec2>,
    pub is_animating: bool,
    pub start_ms: f64,
    pub duration_ms: f64,
    progress: f32,
}

impl TextReveal {
    pub fn clear(&mut self) {
        self.message = None;
        self.points.clear();
        self.is_animating = false;
        self.progress = 0.0;
    }

    pub fn start(&mut self, message: String, points: Vec<Vec2>, duration_ms: f64, now_ms: f64) {
        log::info!(
            "[text] reveal \"{}\" points={} duration={:.0}ms",
            message,
            points.len(),
            duration_ms
        );
        self.message = Some(message);
        self.points = points;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
        self.is_animating = true;
        self.progress = 0.0;
    }

    /// Fraction revealed at `now_ms`, without advancing state.
    pub fn progress_at(&self, now_ms: f64) -> f32 {
        if !self.is_animating {
            return if self.points.is_empty() { 0.0 } else { 1.0 };
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Advance the animation. Returns true on the tick the reveal completes.
    pub fn update(&mut self, now_ms: f64) -> bool {
        if !self.is_animating {
            self.progress = self.progress_at(now_ms);
            return false;
        }
        // never moves backwards, even if the clock does
        self.progress = self.progress_at(now_ms).max(self.progress);
        if self.progress >= 1.0 {
            self.is_animating = false;
            log::debug!("[text] reveal complete");
            return true;
        }
        false
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn visible_count(&self) -> usize {
        (self.progress * self.points.len() as f32).floor() as usize
    }

    /// Drawable dots for the revealed prefix. A point farther than half the
    /// font size from its predecessor is a pen lift and is skipped.
    pub fn dots(&self, now_ms: f64, noise: &SmoothNoise, tuning: &TextTuning) -> Vec<TextDot> {
        let gap = tuning.font_size * 0.5;
        let time = now_ms * tuning.breathing_speed;
        let (lo, hi) = tuning.dot_size_range;
        let visible = self.visible_count().min(self.points.len());

        let mut dots = Vec::with_capacity(visible);
        for i in 0..visible {
            let p = self.points[i];
            if i > 0 && self.points[i - 1].distance(p) > gap {
                continue;
            }
            dots.push(TextDot {
                position: p,
                diameter: breathing_size(noise, i, time, lo, hi),
            });
        }
        dots
    }
}

#[inline]
pub fn breathing_size(noise: &SmoothNoise, index: usize, time: f64, lo: f32, hi: f32) -> f32 {
    lerp(lo, hi, noise.sample2(index as f64 * 0.1, time))
}
