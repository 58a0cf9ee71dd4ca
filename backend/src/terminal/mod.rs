//! Terminal Processing
//!
//! The per-tick passenger pipeline, one module per stage:
//! - **checkin**: registration desks and security checkpoints (FIFO queues)
//! - **gate**: flight schedule transitions, boarding and departure
//!
//! Each stage is a plain function over [`AirportState`](crate::models::AirportState)
//! that returns the events it produced. The orchestrator calls them in a
//! fixed order; none of them touch the random source.
//!
//! # Critical Invariants
//!
//! 1. **Flag order**: `is_on_board ⇒ passed_security ⇒ has_ticket`
//! 2. **Capacity**: a flight never seats more than its capacity
//! 3. **Monotonic status**: `OnTime → Boarding → Departed`, never backwards
//!
//! # Example
//!
//! ```rust
//! use airport_simulator_core::{AirportState, Flight, Passenger, PassengerOrigin};
//! use airport_simulator_core::terminal;
//!
//! let mut state = AirportState::new(vec![Flight::new("PS101".to_string(), "Kyiv".to_string(), 5, 50)]);
//! for id in 1..=5 {
//!     state.admit_passenger(Passenger::new(id, format!("P{}", id), "PS101".to_string(), 1, PassengerOrigin::Random));
//! }
//!
//! let events = terminal::process_registration(&mut state, 3, 1).unwrap();
//! assert_eq!(events.len(), 3);
//! assert_eq!(state.registration_queue_len(), 2);
//! assert_eq!(state.security_queue_len(), 3);
//! ```

pub mod checkin;
pub mod gate;

use crate::models::{FlightError, PassengerError, PassengerId};
use thiserror::Error;

// Re-export public API
pub use checkin::{process_registration, process_security};
pub use gate::{update_flights, BOARDING_LEAD_TICKS};

/// Errors raised while moving passengers through the terminal
///
/// None of these occur on a consistent state; they guard the model
/// invariants when state is mutated from outside the orchestrator.
#[derive(Debug, Error, PartialEq)]
pub enum TerminalError {
    #[error("Passenger {0} is queued but not on the roster")]
    PassengerNotFound(PassengerId),

    #[error("Flight {0} not found")]
    FlightNotFound(String),

    #[error("Passenger error: {0}")]
    Passenger(#[from] PassengerError),

    #[error("Flight error: {0}")]
    Flight(#[from] FlightError),
}
