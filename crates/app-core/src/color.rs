use crate::ease::lerp;

/// Hue in degrees, saturation and brightness in 0..100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    pub const fn from_array(hsb: [f32; 3]) -> Self {
        Self::new(hsb[0], hsb[1], hsb[2])
    }

    /// Component-wise interpolation in HSB space.
    pub fn lerp(self, other: Hsb, t: f32) -> Hsb {
        Hsb::new(
            lerp(self.hue, other.hue, t),
            lerp(self.saturation, other.saturation, t),
            lerp(self.brightness, other.brightness, t),
        )
    }

    pub fn to_rgb(self) -> [f32; 3] {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.brightness / 100.0).clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        [r + m, g + m, b + m]
    }

    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_rgb();
        [r, g, b, alpha.clamp(0.0, 1.0)]
    }
}

pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const BLACK: [f32; 3] = [0.0, 0.0, 0.0];

#[inline]
pub fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0)]
}
