// Sanity checks on the overlay's tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod particle {
    include!("../src/core/particle.rs");
}
mod throttle {
    include!("../src/core/throttle.rs");
}
mod engine {
    include!("../src/core/engine.rs");
}

use engine::*;
use particle::*;
use throttle::BURST_INTERVAL_MS;

#[test]
fn decay_gives_a_fifty_frame_lifetime() {
    let frames = (1.0 / OPACITY_DECAY_PER_STEP).round() as u32;
    assert_eq!(frames, 50);
}

#[test]
fn kinematic_ranges_are_well_formed() {
    assert!(SIZE_MIN > 0.0 && SIZE_MIN < SIZE_MAX);
    assert!(SPEED_X_MAX > 0.0);
    assert!(SPEED_Y_MIN < SPEED_Y_MAX);
    // the whole vertical range drifts upward
    assert!(SPEED_Y_MAX <= 0.0);
}

#[test]
fn heart_base_size_is_inside_the_size_range() {
    // hearts scale up from the authored path; sizes below base would shrink
    assert!(HEART_BASE_SIZE > 0.0);
    assert!(SIZE_MIN > HEART_BASE_SIZE);
}

#[test]
fn burst_interval_and_count_are_positive() {
    assert!(BURST_INTERVAL_MS > 0.0);
    assert_eq!(PARTICLES_PER_BURST, 3);
}

#[test]
fn palette_entries_are_distinct() {
    assert_ne!(HAND_PALETTE[0], HAND_PALETTE[1]);
}
