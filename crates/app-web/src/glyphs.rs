use crate::dom;
use app_core::{trace_outline, CoverageMask, GlyphSampler, TextOutline};
use glam::Vec2;
use web_sys as web;

const FONT_FAMILY: &str = "Montserrat, 'Helvetica Neue', sans-serif";
const FONT_WEIGHT: &str = "100";

/// Rasterizes a message on an offscreen 2D canvas and walks the glyph
/// outlines of the resulting alpha mask.
pub struct CanvasGlyphSampler {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    step: usize,
}

impl CanvasGlyphSampler {
    pub fn new(document: &web::Document, step: usize) -> anyhow::Result<Self> {
        let canvas = dom::create_canvas(document, 1, 1)?;
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx, step })
    }

    fn font(font_size: f32) -> String {
        format!("{} {}px {}", FONT_WEIGHT, font_size, FONT_FAMILY)
    }

    fn rasterize(&self, message: &str, font_size: f32) -> Option<(CoverageMask, Vec2, f32)> {
        let font = Self::font(font_size);
        self.ctx.set_font(&font);
        let metrics = self.ctx.measure_text(message).ok()?;
        let ascent = metrics.actual_bounding_box_ascent() as f32;
        let descent = metrics.actual_bounding_box_descent() as f32;
        let size = Vec2::new(metrics.width() as f32, ascent + descent);
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }

        let pad = (font_size * 0.25).ceil();
        let w = (size.x + pad * 2.0).ceil() as u32;
        let h = (size.y + pad * 2.0).ceil() as u32;
        // resizing resets context state, so the font is set again afterwards
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.ctx.set_font(&font);
        self.ctx.set_fill_style_str("#fff");
        self.ctx.set_text_baseline("alphabetic");
        self.ctx
            .fill_text(message, pad as f64, (pad + ascent) as f64)
            .ok()?;
        let data = self.ctx.get_image_data(0.0, 0.0, w as f64, h as f64).ok()?;
        let mask = CoverageMask::from_rgba_alpha(w as usize, h as usize, &data.data().0)?;
        Some((mask, size, pad))
    }
}

impl GlyphSampler for CanvasGlyphSampler {
    fn sample(&mut self, message: &str, font_size: f32) -> TextOutline {
        let Some((mask, size, pad)) = self.rasterize(message, font_size) else {
            log::warn!("[text] could not rasterize \"{}\"", message);
            return TextOutline::default();
        };
        let offset = Vec2::splat(pad);
        let points = trace_outline(&mask, self.step)
            .into_iter()
            .map(|p| p - offset)
            .collect();
        TextOutline { points, size }
    }
}
