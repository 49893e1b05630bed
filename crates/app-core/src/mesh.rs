//! Background gradient mesh: a grid of colored control points wandering on
//! smooth noise around their home positions.

use crate::config::MeshTuning;
use crate::ease::map_range;
use crate::noise::SmoothNoise;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct MeshPoint {
    pub base: Vec2,
    pub position: Vec2,
    pub color: [f32; 3],
    pub seed: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub points: Vec<MeshPoint>,
    pub circle_diameter: f32,
}

impl Mesh {
    /// `(density + 1)^2` points spanning the canvas corner to corner, colored
    /// along the diagonal between the two gradient stops.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, canvas: Vec2, tuning: &MeshTuning) -> Self {
        let n = tuning.density.max(1);
        let (from, to) = tuning.gradient;
        let diagonal = (canvas.x + canvas.y).max(f32::EPSILON);
        let mut points = Vec::with_capacity((n + 1) * (n + 1));
        for i in 0..=n {
            for j in 0..=n {
                let base = Vec2::new(
                    canvas.x * i as f32 / n as f32,
                    canvas.y * j as f32 / n as f32,
                );
                let t = (base.x + base.y) / diagonal;
                points.push(MeshPoint {
                    base,
                    position: base,
                    color: from.lerp(to, t).to_rgb(),
                    seed: Vec2::new(rng.gen::<f32>() * 1000.0, rng.gen::<f32>() * 1000.0),
                });
            }
        }
        let spacing = canvas.x / (n.saturating_sub(1).max(1)) as f32;
        Self {
            points,
            circle_diameter: spacing * tuning.circle_scale,
        }
    }

    pub fn update(&mut self, tick: u64, noise: &SmoothNoise, tuning: &MeshTuning) {
        let time = tick as f64 * tuning.wander_speed as f64;
        let amount = tuning.wander_amount as f64;
        for p in &mut self.points {
            let wx = noise.sample(p.seed.x as f64 + time) as f64;
            let wy = noise.sample(p.seed.y as f64 + time) as f64;
            p.position = p.base
                + Vec2::new(
                    map_range(wx, 0.0, 1.0, -amount, amount) as f32,
                    map_range(wy, 0.0, 1.0, -amount, amount) as f32,
                );
        }
    }
}
