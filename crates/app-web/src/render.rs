//! Canvas2D drawing of the per-frame display list.
//!
//! The glow and text layers are painted on offscreen canvases first and then
//! composited onto the visible canvas, matching the layer order in
//! [`app_core::Scene`].

use crate::dom;
use anyhow::anyhow;
use app_core::{Circle, Scene};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

const DODGE: &str = "color-dodge";
const NORMAL: &str = "source-over";

struct Layer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Layer {
    fn new(document: &web::Document, size: Vec2) -> anyhow::Result<Self> {
        let canvas = dom::create_canvas(document, size.x as u32, size.y as u32)?;
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    fn resize(&self, size: Vec2) {
        self.canvas.set_width((size.x as u32).max(1));
        self.canvas.set_height((size.y as u32).max(1));
    }

    fn clear(&self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }
}

pub struct Canvas2dRenderer {
    ctx: web::CanvasRenderingContext2d,
    glow: Layer,
    text: Layer,
}

impl Canvas2dRenderer {
    pub fn new(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        size: Vec2,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            ctx: dom::context_2d(canvas)?,
            glow: Layer::new(document, size)?,
            text: Layer::new(document, size)?,
        })
    }

    pub fn resize(&mut self, size: Vec2) {
        self.glow.resize(size);
        self.text.resize(size);
    }

    pub fn draw(&mut self, scene: &Scene) -> anyhow::Result<()> {
        let (w, h) = (scene.canvas.x as f64, scene.canvas.y as f64);
        let ctx = &self.ctx;
        ctx.set_filter("none");
        ctx.set_global_composite_operation(NORMAL)
            .map_err(|e| anyhow!("{:?}", e))?;
        ctx.set_fill_style_str("#000");
        ctx.fill_rect(0.0, 0.0, w, h);

        fill_circles(ctx, &scene.mesh)?;

        self.glow.clear();
        fill_circles(&self.glow.ctx, &scene.glow)?;
        ctx.set_global_composite_operation(DODGE)
            .map_err(|e| anyhow!("{:?}", e))?;
        blit(ctx, &self.glow)?;
        ctx.set_global_composite_operation(NORMAL)
            .map_err(|e| anyhow!("{:?}", e))?;

        if !scene.text.is_empty() {
            self.text.clear();
            fill_circles(&self.text.ctx, &scene.text)?;
            ctx.set_filter(&blur(scene.text_glow_blur));
            blit(ctx, &self.text)?;
            ctx.set_filter("none");
            blit(ctx, &self.text)?;
        }

        for speck in &scene.grain {
            ctx.set_fill_style_str(&css_rgba(speck.color));
            ctx.fill_rect(speck.position.x as f64, speck.position.y as f64, 1.0, 1.0);
        }
        Ok(())
    }
}

fn blit(ctx: &web::CanvasRenderingContext2d, layer: &Layer) -> anyhow::Result<()> {
    ctx.draw_image_with_html_canvas_element(&layer.canvas, 0.0, 0.0)
        .map_err(|e| anyhow!("drawImage: {:?}", e))
}

/// Fill each circle with its own blur; the filter string is only rebuilt
/// when the radius changes between consecutive circles.
fn fill_circles(ctx: &web::CanvasRenderingContext2d, circles: &[Circle]) -> anyhow::Result<()> {
    let mut current_blur = None;
    for c in circles {
        if current_blur != Some(c.blur) {
            ctx.set_filter(&blur(c.blur));
            current_blur = Some(c.blur);
        }
        ctx.set_fill_style_str(&css_rgba(c.color));
        ctx.begin_path();
        ctx.arc(
            c.center.x as f64,
            c.center.y as f64,
            (c.diameter * 0.5).max(0.0) as f64,
            0.0,
            TAU,
        )
        .map_err(|e| anyhow!("arc: {:?}", e))?;
        ctx.fill();
    }
    ctx.set_filter("none");
    Ok(())
}

#[inline]
fn blur(px: f32) -> String {
    if px <= 0.0 {
        "none".to_string()
    } else {
        format!("blur({}px)", px)
    }
}

#[inline]
fn css_rgba(c: [f32; 4]) -> String {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{:.3})",
        to_u8(c[0]),
        to_u8(c[1]),
        to_u8(c[2]),
        c[3].clamp(0.0, 1.0)
    )
}
