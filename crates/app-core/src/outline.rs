//! Turns a rasterized text coverage mask into outline points ordered along
//! each contour, so consecutive points trace strokes and jumps between
//! contours show up as large gaps.

use glam::Vec2;

const INSIDE: u8 = 128;

// 4-neighbours first so the walk prefers straight steps over diagonals.
const NEIGHBOURS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];

/// 8-bit coverage per pixel, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageMask {
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

impl CoverageMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; width * height],
        }
    }

    /// Build from interleaved RGBA bytes, keeping the alpha channel.
    pub fn from_rgba_alpha(width: usize, height: usize, rgba: &[u8]) -> Option<Self> {
        if rgba.len() != width * height * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            coverage: rgba.chunks_exact(4).map(|px| px[3]).collect(),
        })
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width && y < self.height {
            let i = y * self.width + x;
            self.coverage[i] = self.coverage[i].max(value);
        }
    }

    #[inline]
    pub fn inside(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.coverage[y as usize * self.width + x as usize] >= INSIDE
    }

    fn is_edge(&self, x: i32, y: i32) -> bool {
        self.inside(x, y)
            && NEIGHBOURS[..4]
                .iter()
                .any(|(dx, dy)| !self.inside(x + dx, y + dy))
    }
}

/// Walk every contour of `mask` and keep one point per `step` edge pixels.
/// Points sit at pixel centres in mask coordinates.
pub fn trace_outline(mask: &CoverageMask, step: usize) -> Vec<Vec2> {
    let step = step.max(1);
    let (w, h) = (mask.width, mask.height);
    let mut edge = vec![false; w * h];
    for y in 0..h {
        for x in 0..w {
            edge[y * w + x] = mask.is_edge(x as i32, y as i32);
        }
    }

    let mut visited = vec![false; w * h];
    let mut points = Vec::new();
    let mut contour = Vec::new();
    for start in 0..w * h {
        if !edge[start] || visited[start] {
            continue;
        }
        contour.clear();
        let mut cur = start;
        loop {
            visited[cur] = true;
            contour.push(cur);
            let (cx, cy) = ((cur % w) as i32, (cur / w) as i32);
            let next = NEIGHBOURS.iter().find_map(|(dx, dy)| {
                let (nx, ny) = (cx + dx, cy + dy);
                if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                    return None;
                }
                let ni = ny as usize * w + nx as usize;
                (edge[ni] && !visited[ni]).then_some(ni)
            });
            match next {
                Some(ni) => cur = ni,
                None => break,
            }
        }
        points.extend(
            contour
                .iter()
                .step_by(step)
                .map(|&i| Vec2::new((i % w) as f32 + 0.5, (i / w) as f32 + 0.5)),
        );
    }
    points
}
