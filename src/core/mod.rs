pub mod engine;
pub mod particle;
pub mod throttle;

pub use engine::*;
pub use particle::*;
pub use throttle::*;
