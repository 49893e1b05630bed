use app_core::MotionFrame;
use glam::Vec2;

/// Stand-in for a webcam on desktop: a bright spot follows the cursor across
/// an otherwise black low-resolution frame, so moving the pointer reads as
/// motion to the estimator.
pub struct PointerCapture {
    width: u32,
    height: u32,
    radius: f32,
}

impl PointerCapture {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            radius: width.min(height) as f32 * 0.1,
        }
    }

    pub fn paint(&self, cursor: Option<Vec2>, canvas: Vec2) -> MotionFrame {
        let mut frame = MotionFrame::filled(self.width, self.height, [0, 0, 0]);
        let Some(cursor) = cursor else {
            return frame;
        };
        if canvas.x <= 0.0 || canvas.y <= 0.0 {
            return frame;
        }
        let spot = cursor / canvas * Vec2::new(self.width as f32, self.height as f32);
        let r2 = self.radius * self.radius;
        for y in 0..self.height {
            for x in 0..self.width {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - spot;
                if d.length_squared() <= r2 {
                    let i = ((y * self.width + x) * 4) as usize;
                    frame.rgba[i..i + 3].fill(255);
                }
            }
        }
        frame
    }
}
