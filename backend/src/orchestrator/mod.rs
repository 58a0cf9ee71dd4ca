//! Orchestrator - main simulation loop
//!
//! Owns the terminal state and drives the tick pipeline.
//!
//! See `engine.rs` for the tick loop and `snapshot.rs` for the status view.

pub mod engine;
pub mod snapshot;

// Re-export main types for convenience
pub use engine::{FlightConfig, Orchestrator, OrchestratorConfig, SimulationError, TickResult};
pub use snapshot::{FlightSnapshot, StatusSnapshot};
