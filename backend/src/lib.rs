//! Airport Simulator Core - Rust Engine
//!
//! Discrete-tick simulation of passenger flow through an airport terminal:
//! arrival, registration, security, boarding and departure.
//!
//! # Architecture
//!
//! - **core**: Time management
//! - **models**: Domain types (Passenger, Flight, Event, AirportState)
//! - **arrivals**: Passenger generation
//! - **terminal**: Per-tick stages (registration, security, gate)
//! - **orchestrator**: Main simulation loop and status snapshots
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Passenger flags only switch on, in order: ticket, security, on board
//! 2. Flight status only moves forward: OnTime, Boarding, Departed
//! 3. A flight never seats more passengers than its capacity
//! 4. All randomness is deterministic (injected, seeded source)

// Module declarations
pub mod arrivals;
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod terminal;

// Re-exports for convenience
pub use arrivals::{ArrivalConfig, ArrivalGenerator};
pub use crate::core::time::TimeManager;
pub use models::{
    event::{Event, EventLog},
    flight::{Flight, FlightError, FlightStatus},
    passenger::{Passenger, PassengerError, PassengerId, PassengerOrigin, PassengerStage},
    state::AirportState,
};
pub use orchestrator::{
    FlightConfig, FlightSnapshot, Orchestrator, OrchestratorConfig, SimulationError,
    StatusSnapshot, TickResult,
};
pub use rng::{RandomSource, RngManager};
pub use terminal::TerminalError;
