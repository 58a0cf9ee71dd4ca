//! xorshift64* random number generator
//!
//! Small, fast and reproducible: the same seed always yields the same
//! sequence, so a simulation run can be replayed command for command.

use super::RandomSource;
use serde::{Deserialize, Serialize};

/// Seedable xorshift64* generator
///
/// # Example
/// ```
/// use airport_simulator_core::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let flight_index = rng.pick_index(3);
/// assert!(flight_index < 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a new generator; a zero seed is replaced by 1 (xorshift
    /// state must never be zero)
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Current internal state
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for RngManager {
    fn next_f64(&mut self) -> f64 {
        // top 53 bits → [0.0, 1.0)
        (self.next_u64() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");
        let span = (max - min) as u64;
        min + (self.next_u64() % span) as i64
    }
}
