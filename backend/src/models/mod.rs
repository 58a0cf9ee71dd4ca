//! Domain models for the airport simulator

pub mod event;
pub mod flight;
pub mod passenger;
pub mod state;

// Re-exports
pub use event::{Event, EventLog};
pub use flight::{Flight, FlightError, FlightStatus};
pub use passenger::{Passenger, PassengerError, PassengerId, PassengerOrigin, PassengerStage};
pub use state::AirportState;
