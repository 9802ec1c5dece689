#![cfg(target_arch = "wasm32")]
//! Web shim for the heart-burst overlay.
//!
//! The host page owns the webcam and the MediaPipe Hands detector; this crate
//! owns everything stateful. JS constructs a [`HeartOverlay`] once the DOM is
//! ready and forwards each detection result's `multiHandLandmarks` to
//! [`HeartOverlay::on_results`].

use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod detect;
mod dom;
mod frame;
mod overlay;
mod render;

use crate::core::HeartEngine;
use crate::frame::OverlayContext;
use crate::render::HeartPainter;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heartcam starting");
    Ok(())
}

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Handle the host page drives: one per session, created after the DOM is
/// ready, fed once per detection callback.
#[wasm_bindgen]
pub struct HeartOverlay {
    ctx: OverlayContext,
    document: web::Document,
}

#[wasm_bindgen]
impl HeartOverlay {
    /// Look up the output canvas and build the session state. Fails if the
    /// expected DOM nodes are missing or the 2D context is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<HeartOverlay, JsValue> {
        let document = dom::window_document()
            .ok_or_else(|| JsValue::from_str("no window/document"))?;
        let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID).map_err(js_err)?;
        dom::sync_canvas_to_video(
            &canvas,
            constants::DEFAULT_VIDEO_WIDTH,
            constants::DEFAULT_VIDEO_HEIGHT,
        );
        let painter = HeartPainter::new(dom::context_2d(&canvas).map_err(js_err)?);
        let engine = HeartEngine::new(js_sys::Date::now() as u64);
        log::info!(
            "[overlay] ready, canvas {}x{}",
            canvas.width(),
            canvas.height()
        );
        Ok(HeartOverlay {
            ctx: OverlayContext::new(engine, painter, canvas),
            document,
        })
    }

    /// Resize the surface once the webcam reports its actual resolution.
    pub fn set_size(&mut self, width: u32, height: u32) {
        dom::sync_canvas_to_video(&self.ctx.canvas, width, height);
    }

    /// One detection callback: `multi_hand_landmarks` is the detector's
    /// `multiHandLandmarks` array (may be null/empty on hand-free frames).
    pub fn on_results(&mut self, multi_hand_landmarks: &JsValue) {
        let wrists = detect::wrist_points(multi_hand_landmarks);
        self.ctx.frame(&wrists);
    }

    /// Update the loader text during setup ("Starting webcam...", etc.).
    pub fn loading_message(&self, message: &str) {
        overlay::set_loading_message(&self.document, message);
    }

    /// Setup finished: hide the loader.
    pub fn ready(&self) {
        overlay::hide_loader(&self.document);
    }

    /// Setup failed in the host shim: surface the error banner.
    pub fn fail(&self, message: &str) {
        log::error!("[overlay] setup failed: {message}");
        overlay::show_error(&self.document, message);
    }
}
