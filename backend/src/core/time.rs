//! Time management for the simulation
//!
//! The airport operates in discrete ticks. Flight schedules are expressed
//! as absolute tick numbers; schedule checks use signed arithmetic so an
//! offset reaching before tick 0 simply never matches.

use serde::{Deserialize, Serialize};

/// Manages simulation time in discrete ticks
///
/// # Example
/// ```
/// use airport_simulator_core::TimeManager;
///
/// let mut time = TimeManager::new();
/// assert_eq!(time.current_tick(), 0);
///
/// time.advance_tick();
/// assert_eq!(time.current_tick(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeManager {
    /// Total ticks elapsed since simulation start
    current_tick: usize,
}

impl TimeManager {
    /// Create a new TimeManager starting at tick 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance time by one tick
    ///
    /// # Example
    /// ```
    /// use airport_simulator_core::TimeManager;
    ///
    /// let mut time = TimeManager::new();
    /// time.advance_tick();
    /// time.advance_tick();
    /// assert_eq!(time.current_tick(), 2);
    /// ```
    pub fn advance_tick(&mut self) {
        self.current_tick += 1;
    }

    /// Get the current tick (total ticks since start)
    pub fn current_tick(&self) -> usize {
        self.current_tick
    }

    /// Check whether the clock is exactly `offset` ticks before `target`
    ///
    /// Uses signed arithmetic: a target earlier than `offset` never matches.
    ///
    /// # Example
    /// ```
    /// use airport_simulator_core::TimeManager;
    ///
    /// let mut time = TimeManager::new();
    /// for _ in 0..3 {
    ///     time.advance_tick();
    /// }
    /// assert!(time.is_ticks_before(5, 2));
    /// assert!(!time.is_ticks_before(1, 2));
    /// ```
    pub fn is_ticks_before(&self, target: usize, offset: usize) -> bool {
        target as i64 - offset as i64 == self.current_tick as i64
    }
}
