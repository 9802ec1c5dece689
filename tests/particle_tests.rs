// Host-side tests for the particle data entity.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particle {
    include!("../src/core/particle.rs");
}

use glam::Vec2;
use particle::*;

fn heart(pos: Vec2, vel: Vec2) -> Particle {
    Particle {
        pos,
        vel,
        size: 60.0,
        opacity: 1.0,
        tag: ColorTag::for_hand(0),
    }
}

#[test]
fn advance_applies_velocity_and_decay() {
    let mut p = heart(Vec2::new(100.0, 100.0), Vec2::new(2.5, -3.0));
    p.advance();
    assert_eq!(p.pos, Vec2::new(102.5, 97.0));
    assert!((p.opacity - (1.0 - OPACITY_DECAY_PER_STEP)).abs() < 1e-6);
    // velocity is constant for the particle's lifetime
    assert_eq!(p.vel, Vec2::new(2.5, -3.0));
}

#[test]
fn opacity_is_monotonically_decreasing() {
    let mut p = heart(Vec2::ZERO, Vec2::new(1.0, -1.0));
    let mut prev = p.opacity;
    for step in 0..60 {
        p.advance();
        assert!(p.opacity < prev, "opacity did not decrease at step {step}");
        prev = p.opacity;
    }
}

#[test]
fn particle_expires_after_exactly_fifty_steps() {
    let mut p = heart(Vec2::ZERO, Vec2::ZERO);
    for step in 1..=49 {
        p.advance();
        assert!(p.is_live(), "expired early at step {step}");
    }
    p.advance();
    assert!(!p.is_live(), "still live after 50 steps");
}

#[test]
fn liveness_boundary_is_strict() {
    let mut p = heart(Vec2::ZERO, Vec2::ZERO);
    p.opacity = 0.0;
    assert!(!p.is_live(), "opacity 0 must count as expired");
    p.opacity = f64::EPSILON;
    assert!(p.is_live());
    p.opacity = -0.5;
    assert!(!p.is_live());
}

#[test]
fn hand_palette_assignment() {
    assert_eq!(ColorTag::for_hand(0), HAND_PALETTE[0]);
    assert_eq!(ColorTag::for_hand(1), HAND_PALETTE[1]);
    // anything beyond the second hand shares the second palette entry
    assert_eq!(ColorTag::for_hand(5), HAND_PALETTE[1]);
    assert_ne!(ColorTag::for_hand(0), ColorTag::for_hand(1));
}

#[test]
fn css_rgba_composes_tag_with_alpha() {
    let tag = ColorTag::new(255, 0, 0);
    assert_eq!(tag.css_rgba(1.0), "rgba(255, 0, 0, 1)");
    assert_eq!(tag.css_rgba(0.5), "rgba(255, 0, 0, 0.5)");
    let blue = ColorTag::new(0, 0, 255);
    assert_eq!(blue.css_rgba(0.25), "rgba(0, 0, 255, 0.25)");
}
