//! Frame differencing and the decaying motion-energy accumulator.

use crate::config::{MotionTuning, Thresholds};

/// Read-only RGBA snapshot from the capture device, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl MotionFrame {
    /// Returns `None` when `rgba` does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        (rgba.len() == width as usize * height as usize * 4).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width * height {
            rgba.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2]]
    }

    /// True when `rgba` holds exactly `width * height` pixels.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.rgba.len() == self.width as usize * self.height as usize * 4
    }

    #[inline]
    pub fn same_shape(&self, other: &MotionFrame) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba.len() == other.rgba.len()
    }
}

#[inline]
fn rgb_distance(a: [u8; 3], b: [u8; 3]) -> f32 {
    let dr = a[0] as f32 - b[0] as f32;
    let dg = a[1] as f32 - b[1] as f32;
    let db = a[2] as f32 - b[2] as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Counts sampled pixels whose color moved more than the per-pixel threshold
/// since the previous frame.
#[derive(Clone, Debug)]
pub struct MotionEstimator {
    pub threshold: f32,
    pub stride: u32,
    previous: Option<MotionFrame>,
}

impl MotionEstimator {
    pub fn new(threshold: f32, stride: u32) -> Self {
        Self {
            threshold,
            stride: stride.max(1),
            previous: None,
        }
    }

    pub fn previous(&self) -> Option<&MotionFrame> {
        self.previous.as_ref()
    }

    /// Compare `current` against the stored previous frame, then store a copy
    /// of `current`. With no capture data, or a frame whose buffer disagrees
    /// with its size, this is a no-op returning 0. The first frame (or one
    /// whose size changed) only primes the comparison.
    pub fn estimate(&mut self, current: Option<&MotionFrame>) -> u32 {
        let Some(current) = current.filter(|f| f.is_well_formed()) else {
            return 0;
        };
        let count = match &self.previous {
            Some(prev) if prev.same_shape(current) => self.count_changed(prev, current),
            _ => 0,
        };
        if let Some(prev) = self.previous.as_mut().filter(|p| p.same_shape(current)) {
            prev.rgba.copy_from_slice(&current.rgba);
        } else {
            self.previous = Some(current.clone());
        }
        count
    }

    fn count_changed(&self, prev: &MotionFrame, current: &MotionFrame) -> u32 {
        let step = self.stride as usize;
        let mut count = 0u32;
        for y in (0..current.height).step_by(step) {
            for x in (0..current.width).step_by(step) {
                if rgb_distance(current.rgb_at(x, y), prev.rgb_at(x, y)) > self.threshold {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Decaying accumulator that gates blob spawns.
#[derive(Clone, Debug)]
pub struct MotionEnergy {
    pub energy: f32,
    pub last_spawn_ms: f64,
    pub thresholds: Thresholds,
    pub noise_floor: u32,
    pub decay: f32,
}

impl MotionEnergy {
    pub fn new(tuning: &MotionTuning) -> Self {
        Self {
            energy: 0.0,
            last_spawn_ms: 0.0,
            thresholds: Thresholds::from_sensitivity(tuning.sensitivity),
            noise_floor: tuning.noise_floor,
            decay: tuning.decay.clamp(0.0, 1.0),
        }
    }

    /// Add `motion_count` if it clears the noise floor, then decay.
    pub fn accumulate(&mut self, motion_count: u32) -> f32 {
        if motion_count > self.noise_floor {
            self.energy += motion_count as f32;
        }
        self.energy = (self.energy * self.decay).max(0.0);
        self.energy
    }

    /// All three gates must hold: enough energy, cooldown elapsed, room for one more.
    pub fn should_spawn(
        &self,
        now_ms: f64,
        cooldown_ms: f64,
        live_blobs: usize,
        max_blobs: usize,
    ) -> bool {
        self.energy > self.thresholds.activation
            && now_ms > self.last_spawn_ms + cooldown_ms
            && live_blobs < max_blobs
    }

    pub fn record_spawn(&mut self, now_ms: f64) {
        self.energy = 0.0;
        self.last_spawn_ms = now_ms;
    }
}
