//! Small interpolation helpers shared by every eased or remapped value.

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
/// Does not clamp; callers clamp the input when they need to.
#[inline]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// One step of exponential approach toward `target`.
///
/// With `rate` in (0, 1] the result always lies between `value` and `target`
/// (inclusive), so repeated calls converge without overshooting.
#[inline]
pub fn approach(value: f32, target: f32, rate: f32) -> f32 {
    let next = lerp(value, target, rate.clamp(0.0, 1.0));
    if value <= target {
        next.clamp(value, target)
    } else {
        next.clamp(target, value)
    }
}

/// A value that eases toward a target each tick and is never assigned directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eased {
    pub current: f32,
    pub target: f32,
    pub rate: f32,
}

impl Eased {
    pub fn new(value: f32, rate: f32) -> Self {
        Self {
            current: value,
            target: value,
            rate,
        }
    }

    #[inline]
    pub fn step(&mut self) -> f32 {
        self.current = approach(self.current, self.target, self.rate);
        self.current
    }
}
