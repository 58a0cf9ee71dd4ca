//! Passenger arrival generation.
//!
//! Each tick the generator flips one weighted coin; on success a single
//! passenger walks in for a uniformly chosen flight. Manual arrivals
//! (the `add` command) skip the coin flip. All draws go through the
//! injected [`RandomSource`], so arrivals are reproducible from the seed.
//!
//! # Example
//!
//! ```
//! use airport_simulator_core::arrivals::{ArrivalConfig, ArrivalGenerator};
//! use airport_simulator_core::{Flight, RngManager};
//!
//! let flights = vec![Flight::new("PS101".to_string(), "Kyiv".to_string(), 5, 50)];
//! let mut rng = RngManager::new(42);
//! let mut generator = ArrivalGenerator::new(ArrivalConfig::default());
//!
//! let p = generator.generate_manual(1, &flights, &mut rng);
//! assert_eq!(p.flight_number(), "PS101");
//! assert!(p.name().starts_with("UserPassenger"));
//! ```

use crate::models::{Flight, Passenger, PassengerId, PassengerOrigin};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Arrival parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalConfig {
    /// Chance of one random arrival per tick, `[0.0, 1.0]`
    pub probability: f64,

    /// Name suffixes are drawn from `[0, name_suffix_range)`
    pub name_suffix_range: u32,
}

impl Default for ArrivalConfig {
    fn default() -> Self {
        Self {
            probability: 0.5,
            name_suffix_range: 1000,
        }
    }
}

/// Creates passengers and hands out sequential ids
#[derive(Debug, Clone)]
pub struct ArrivalGenerator {
    config: ArrivalConfig,
    next_id: PassengerId,
}

impl ArrivalGenerator {
    pub fn new(config: ArrivalConfig) -> Self {
        Self { config, next_id: 1 }
    }

    /// Number of passengers created so far
    pub fn generated_count(&self) -> usize {
        self.next_id - 1
    }

    /// Per-tick arrival draw; `None` when the coin flip fails
    pub fn generate_random(
        &mut self,
        tick: usize,
        flights: &[Flight],
        rng: &mut dyn RandomSource,
    ) -> Option<Passenger> {
        if !rng.chance(self.config.probability) {
            return None;
        }
        Some(self.create(tick, flights, rng, PassengerOrigin::Random))
    }

    /// Passenger requested from the command line
    pub fn generate_manual(
        &mut self,
        tick: usize,
        flights: &[Flight],
        rng: &mut dyn RandomSource,
    ) -> Passenger {
        self.create(tick, flights, rng, PassengerOrigin::Manual)
    }

    /// Passenger for a known flight, bypassing the flight draw
    pub fn generate_for_flight(&mut self, tick: usize, flight_number: &str) -> Passenger {
        let id = self.allocate_id();
        Passenger::new(
            id,
            format!("UserPassenger{}", id),
            flight_number.to_string(),
            tick,
            PassengerOrigin::Manual,
        )
    }

    fn create(
        &mut self,
        tick: usize,
        flights: &[Flight],
        rng: &mut dyn RandomSource,
        origin: PassengerOrigin,
    ) -> Passenger {
        let flight = &flights[rng.pick_index(flights.len())];
        let suffix = rng.range(0, self.config.name_suffix_range as i64);
        let prefix = match origin {
            PassengerOrigin::Random => "Passenger",
            PassengerOrigin::Manual => "UserPassenger",
        };
        let id = self.allocate_id();
        Passenger::new(
            id,
            format!("{}{}", prefix, suffix),
            flight.flight_number().to_string(),
            tick,
            origin,
        )
    }

    fn allocate_id(&mut self) -> PassengerId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
