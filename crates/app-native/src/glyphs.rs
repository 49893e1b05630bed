use app_core::{trace_outline, CoverageMask, GlyphSampler, TextOutline};
use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent, Weight,
};
use glam::Vec2;

// Blank margin around the ink so edge pixels always have an outside neighbour.
const PAD: i32 = 2;

struct Stamp {
    x: i32,
    y: i32,
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

/// Shapes a message with the system's thin sans-serif and traces its outline.
pub struct CosmicGlyphSampler {
    font_system: FontSystem,
    swash_cache: SwashCache,
    step: usize,
}

impl CosmicGlyphSampler {
    pub fn new(step: usize) -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            step,
        }
    }

    fn stamps(&mut self, message: &str, font_size: f32) -> Vec<Stamp> {
        let attrs = Attrs::new().family(Family::SansSerif).weight(Weight::THIN);
        let metrics = Metrics::relative(font_size, 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, message, &attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut stamps = Vec::new();
        for run in buffer.layout_runs() {
            for glyph in run.glyphs {
                let physical = glyph.physical((0.0, 0.0), 1.0);
                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                else {
                    continue;
                };
                // colour glyphs (emoji) carry no usable outline
                if !matches!(image.content, SwashContent::Mask) {
                    continue;
                }
                stamps.push(Stamp {
                    x: physical.x + image.placement.left,
                    y: physical.y + run.line_y as i32 - image.placement.top,
                    width: image.placement.width as usize,
                    height: image.placement.height as usize,
                    alpha: image.data.clone(),
                });
            }
        }
        stamps
    }
}

/// Composite glyph stamps into one mask. Returns the mask and the ink box
/// origin in layout coordinates.
fn composite(stamps: &[Stamp]) -> Option<(CoverageMask, Vec2, Vec2)> {
    let min_x = stamps.iter().map(|s| s.x).min()?;
    let min_y = stamps.iter().map(|s| s.y).min()?;
    let max_x = stamps.iter().map(|s| s.x + s.width as i32).max()?;
    let max_y = stamps.iter().map(|s| s.y + s.height as i32).max()?;
    let (ink_w, ink_h) = (max_x - min_x, max_y - min_y);
    if ink_w <= 0 || ink_h <= 0 {
        return None;
    }

    let mut mask = CoverageMask::new((ink_w + PAD * 2) as usize, (ink_h + PAD * 2) as usize);
    for s in stamps {
        let ox = (s.x - min_x + PAD) as usize;
        let oy = (s.y - min_y + PAD) as usize;
        for (row, line) in s.alpha.chunks_exact(s.width.max(1)).take(s.height).enumerate() {
            for (col, &a) in line.iter().enumerate() {
                if a > 0 {
                    mask.set(ox + col, oy + row, a);
                }
            }
        }
    }
    Some((
        mask,
        Vec2::new(min_x as f32, min_y as f32),
        Vec2::new(ink_w as f32, ink_h as f32),
    ))
}

impl GlyphSampler for CosmicGlyphSampler {
    fn sample(&mut self, message: &str, font_size: f32) -> TextOutline {
        let stamps = self.stamps(message, font_size);
        let Some((mask, _origin, size)) = composite(&stamps) else {
            log::warn!("[text] no glyphs for \"{}\"", message);
            return TextOutline::default();
        };
        let pad = Vec2::splat(PAD as f32);
        let points = trace_outline(&mask, self.step)
            .into_iter()
            .map(|p| p - pad)
            .collect();
        TextOutline { points, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: i32, y: i32, w: usize, h: usize) -> Stamp {
        Stamp {
            x,
            y,
            width: w,
            height: h,
            alpha: vec![255; w * h],
        }
    }

    #[test]
    fn composite_spans_all_stamps() {
        let (mask, origin, size) =
            composite(&[block(10, 5, 4, 6), block(20, 3, 3, 3)]).expect("ink");
        assert_eq!(origin, Vec2::new(10.0, 3.0));
        assert_eq!(size, Vec2::new(13.0, 8.0));
        assert_eq!(mask.width, 13 + 4);
        assert_eq!(mask.height, 8 + 4);
        assert!(mask.inside(PAD, PAD + 2));
        assert!(!mask.inside(0, 0));
    }

    #[test]
    fn nothing_to_composite() {
        assert!(composite(&[]).is_none());
    }
}
