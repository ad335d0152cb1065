//! Canvas 2D backend for the browser build

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::DrawSurface;
use crate::color::Color;

/// `DrawSurface` over a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        // Only fails for a negative radius
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", e);
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, color: Color, width: f32, height: f32) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn fill_rotated_rect(&mut self, origin: Vec2, angle: f32, length: f32, width: f32, color: Color) {
        self.ctx.save();
        let placed = self
            .ctx
            .translate(origin.x as f64, origin.y as f64)
            .and_then(|_| self.ctx.rotate(angle as f64));
        match placed {
            Ok(()) => {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx
                    .fill_rect(0.0, -(width as f64) / 2.0, length as f64, width as f64);
            }
            Err(e) => log::warn!("transform failed: {:?}", e),
        }
        self.ctx.restore();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn set_glow(&mut self, blur: f32, color: Color) {
        self.ctx.set_shadow_blur(blur.max(0.0) as f64);
        self.ctx.set_shadow_color(&color.to_css());
    }
}
