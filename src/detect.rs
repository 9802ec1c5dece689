//! Boundary with the external hand detector.
//!
//! The detector (MediaPipe Hands on the JS side) delivers one result object
//! per processed video frame; we only read `multiHandLandmarks`, an array of
//! per-hand landmark arrays whose first entry is the wrist in normalized
//! [0,1] coordinates.

use glam::Vec2;
use js_sys::{Array, Reflect};
use smallvec::SmallVec;
use wasm_bindgen::JsValue;

/// Wrist points for the hands in one detection result, in detection order.
/// The detector is configured for at most two hands.
pub type WristPoints = SmallVec<[Vec2; 2]>;

/// Extract the normalized wrist point (landmark 0) of each detected hand.
/// A null/undefined result or an empty array means no hands this frame,
/// which is normal operation. Hands with an unreadable wrist are skipped.
pub fn wrist_points(multi_hand_landmarks: &JsValue) -> WristPoints {
    let mut out = WristPoints::new();
    if multi_hand_landmarks.is_null() || multi_hand_landmarks.is_undefined() {
        return out;
    }
    let hands = Array::from(multi_hand_landmarks);
    for (i, hand) in hands.iter().enumerate() {
        let wrist = Array::from(&hand).get(0);
        match point_xy(&wrist) {
            Some(p) => out.push(p),
            None => log::warn!("[detect] hand {i}: unreadable wrist landmark"),
        }
    }
    out
}

fn point_xy(v: &JsValue) -> Option<Vec2> {
    let x = Reflect::get(v, &JsValue::from_str("x")).ok()?.as_f64()?;
    let y = Reflect::get(v, &JsValue::from_str("y")).ok()?.as_f64()?;
    Some(Vec2::new(x as f32, y as f32))
}
