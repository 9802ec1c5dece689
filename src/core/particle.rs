use glam::Vec2;

/// Opacity lost per advance step. A fresh particle at 1.0 survives 50 steps.
///
/// Opacity accumulates in f64: fifty f32 subtractions of 0.02 round to a
/// value just above zero, which would stretch the lifetime to 51 frames.
pub const OPACITY_DECAY_PER_STEP: f64 = 0.02;

/// Reference size the heart path is authored at; a particle's canvas
/// transform scales by `size / HEART_BASE_SIZE`.
pub const HEART_BASE_SIZE: f32 = 30.0;

/// Per-hand palette: first detected hand gets the first entry, any later
/// hand the second.
pub const HAND_PALETTE: [ColorTag; 2] = [
    ColorTag::new(255, 0, 0), // red
    ColorTag::new(0, 0, 255), // blue
];

/// Discrete per-source identity: an RGB triple without alpha, so the render
/// step can compose it with the particle's current opacity each frame.
///
/// Also the throttle key, hence `Eq + Hash`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorTag {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorTag {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette entry for a detected hand index (0 -> red, rest -> blue).
    pub fn for_hand(index: usize) -> Self {
        if index == 0 {
            HAND_PALETTE[0]
        } else {
            HAND_PALETTE[1]
        }
    }

    /// CSS `rgba(...)` value with the given alpha injected.
    pub fn css_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// One animated heart. Velocity is constant for the particle's lifetime;
/// only position and opacity change, once per advance step.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f64,
    pub tag: ColorTag,
}

impl Particle {
    /// Live iff still visible. Expired particles are pruned, never reused.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.opacity > 0.0
    }

    /// One Euler step plus the fixed opacity decrement. Not wall-clock
    /// corrected: speed is tied to the detection callback rate.
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.opacity -= OPACITY_DECAY_PER_STEP;
    }
}
