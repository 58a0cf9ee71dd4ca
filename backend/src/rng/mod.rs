//! Deterministic random number generation
//!
//! The engine never touches a global random source. Everything random
//! (arrival coin flips, flight choice, passenger name suffixes) is drawn
//! from a [`RandomSource`] handed to the orchestrator at construction.

mod xorshift;

pub use xorshift::RngManager;

/// Source of randomness consumed by the simulation
///
/// Implemented by [`RngManager`]; tests may supply scripted sources.
pub trait RandomSource {
    /// Uniform value in `[0.0, 1.0)`
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[min, max)`
    ///
    /// # Panics
    /// Implementations may panic if `min >= max`.
    fn range(&mut self, min: i64, max: i64) -> i64;

    /// Bernoulli trial succeeding with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform index into a collection of `len` elements
    ///
    /// # Panics
    /// Panics if `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty collection");
        self.range(0, len as i64) as usize
    }
}
