//! Canvas 2D drawing of the heart particles.

use crate::core::{Particle, HEART_BASE_SIZE};
use web_sys as web;

/// Owns the 2D context and knows how to clear the surface and paint one
/// heart. All randomness lives upstream in the engine; this is pure drawing.
pub struct HeartPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl HeartPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Full-surface erase, once per detection callback.
    pub fn clear(&self, width: u32, height: u32) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    /// Draw one heart at its current position, scaled by `size /
    /// HEART_BASE_SIZE`, filled with the tag's RGB at the particle's current
    /// opacity.
    pub fn draw(&self, p: &Particle) {
        let scale = f64::from(p.size / HEART_BASE_SIZE);
        self.ctx.save();
        _ = self.ctx.translate(f64::from(p.pos.x), f64::from(p.pos.y));
        _ = self.ctx.scale(scale, scale);
        self.ctx.begin_path();
        self.ctx.move_to(0.0, 0.0);
        // Two cubic beziers approximating the heart outline, authored at
        // HEART_BASE_SIZE units.
        self.ctx.bezier_curve_to(-5.0, -5.0, -10.0, 0.0, 0.0, 10.0);
        self.ctx.bezier_curve_to(10.0, 0.0, 5.0, -5.0, 0.0, 0.0);
        self.ctx
            .set_fill_style_str(&p.tag.css_rgba(p.opacity.clamp(0.0, 1.0)));
        self.ctx.fill();
        self.ctx.restore();
    }
}
