//! Backend-neutral display list produced once per frame.
//!
//! Frontends draw, in order: a black clear, `mesh` with normal blending, the
//! `glow` layer composited with a dodge/lighten blend, the `text` layer twice
//! (blurred by `text_glow_blur`, then sharp), and finally the `grain` specks.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub diameter: f32,
    /// Straight (non-premultiplied) RGBA in 0..1.
    pub color: [f32; 4],
    /// Gaussian blur radius in pixels; 0 draws a hard edge.
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrainSpeck {
    pub position: Vec2,
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub canvas: Vec2,
    pub mesh: Vec<Circle>,
    pub glow: Vec<Circle>,
    pub text: Vec<Circle>,
    pub text_glow_blur: f32,
    pub grain: Vec<GrainSpeck>,
}

impl Scene {
    pub fn circle_count(&self) -> usize {
        self.mesh.len() + self.glow.len() + self.text.len()
    }
}

/// Specks per frame for a canvas and grain amount (0 disables grain); a
/// partial speck rounds up.
pub fn grain_count(canvas: Vec2, amount: f32, pixels_per_particle: f32) -> usize {
    if amount <= 0.0 {
        return 0;
    }
    ((canvas.x * canvas.y / pixels_per_particle) * amount)
        .ceil()
        .max(0.0) as usize
}
