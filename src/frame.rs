use crate::core::{ColorTag, HeartEngine};
use crate::detect::WristPoints;
use crate::render::HeartPainter;
use glam::Vec2;
use instant::Instant;
use web_sys as web;

/// Long-lived per-session state driven once per detection callback. Owns
/// the particle engine and the drawing surface; the external detector only
/// controls the cadence.
pub struct OverlayContext {
    pub engine: HeartEngine,
    pub painter: HeartPainter,
    pub canvas: web::HtmlCanvasElement,
    started: Instant,
}

impl OverlayContext {
    pub fn new(engine: HeartEngine, painter: HeartPainter, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            engine,
            painter,
            canvas,
            started: Instant::now(),
        }
    }

    /// Milliseconds since the session started; monotonic, feeds the throttle.
    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// One full tick for one detection result: trigger throttle-gated bursts
    /// for every detected hand, then clear, prune, draw and advance exactly
    /// once, regardless of how many hands fired.
    pub fn frame(&mut self, wrists: &WristPoints) {
        let width = self.canvas.width();
        let height = self.canvas.height();
        let now_ms = self.now_ms();

        for (i, wrist) in wrists.iter().enumerate() {
            let pos = Vec2::new(wrist.x * width as f32, wrist.y * height as f32);
            self.engine.trigger_burst(pos, ColorTag::for_hand(i), now_ms);
        }

        self.painter.clear(width, height);
        self.engine.retire_expired();
        for p in self.engine.particles() {
            self.painter.draw(p);
        }
        self.engine.advance();
    }
}
