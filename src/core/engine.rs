use super::particle::{ColorTag, Particle};
use super::throttle::SpawnThrottle;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Hearts spawned per accepted trigger.
pub const PARTICLES_PER_BURST: usize = 3;

// Randomized kinematics, half-open ranges.
pub const SIZE_MIN: f32 = 40.0;
pub const SIZE_MAX: f32 = 100.0;
pub const SPEED_X_MAX: f32 = 4.0; // vel.x in [-SPEED_X_MAX, SPEED_X_MAX)
pub const SPEED_Y_MIN: f32 = -7.0; // vel.y in [SPEED_Y_MIN, SPEED_Y_MAX): upward drift
pub const SPEED_Y_MAX: f32 = -2.0;

/// Long-lived animation state: the live particle set, the per-tag spawn
/// throttle, and the session RNG. All mutation happens inside the single
/// detection-callback context, so no interior synchronization is needed.
pub struct HeartEngine {
    particles: Vec<Particle>,
    throttle: SpawnThrottle,
    rng: StdRng,
}

impl HeartEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            throttle: SpawnThrottle::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Throttle-gated burst at `pos`. Appends exactly
    /// [`PARTICLES_PER_BURST`] particles and returns that count when the
    /// tag's interval has elapsed; otherwise appends nothing and returns 0.
    pub fn trigger_burst(&mut self, pos: Vec2, tag: ColorTag, now_ms: f64) -> usize {
        if !self.throttle.should_spawn(tag, now_ms) {
            return 0;
        }
        let burst = generate_burst(&mut self.rng, pos, tag);
        let n = burst.len();
        self.particles.extend(burst);
        n
    }

    /// Drop every particle whose opacity has run out. Draw order of the
    /// survivors is unchanged.
    pub fn retire_expired(&mut self) {
        self.particles.retain(Particle::is_live);
    }

    /// One Euler/decay step for every live particle.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.advance();
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Build one burst: all particles share the trigger point; divergence comes
/// only from the independently randomized size and velocity.
pub fn generate_burst<R: Rng>(
    rng: &mut R,
    pos: Vec2,
    tag: ColorTag,
) -> SmallVec<[Particle; PARTICLES_PER_BURST]> {
    (0..PARTICLES_PER_BURST)
        .map(|_| Particle {
            pos,
            vel: Vec2::new(
                rng.gen_range(-SPEED_X_MAX..SPEED_X_MAX),
                rng.gen_range(SPEED_Y_MIN..SPEED_Y_MAX),
            ),
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
            opacity: 1.0,
            tag,
        })
        .collect()
}
