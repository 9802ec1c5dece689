use super::particle::ColorTag;
use fnv::FnvHashMap;

/// Minimum spacing between accepted bursts for one color tag.
///
/// The original overlay shipped with a stale comment claiming 500ms; the
/// value that actually executed was 100ms, so that is the contract here.
pub const BURST_INTERVAL_MS: f64 = 100.0;

/// Per-tag rate limiter for burst spawning.
///
/// Each tag throttles independently; a rejected trigger leaves the recorded
/// timestamp untouched.
#[derive(Debug, Default)]
pub struct SpawnThrottle {
    last_burst_ms: FnvHashMap<ColorTag, f64>,
}

impl SpawnThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and records `now_ms` as the tag's last accepted time if
    /// the tag has never fired or the interval has elapsed. Otherwise false,
    /// with no side effects.
    pub fn should_spawn(&mut self, tag: ColorTag, now_ms: f64) -> bool {
        match self.last_burst_ms.get(&tag) {
            Some(&last) if now_ms - last < BURST_INTERVAL_MS => false,
            _ => {
                self.last_burst_ms.insert(tag, now_ms);
                true
            }
        }
    }

    /// Last accepted trigger time for a tag, if any.
    pub fn last_accepted(&self, tag: ColorTag) -> Option<f64> {
        self.last_burst_ms.get(&tag).copied()
    }
}
