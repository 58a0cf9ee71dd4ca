//! Status Snapshot - read-only view of the terminal
//!
//! What the front end shows after every command: clock, flight board,
//! queue lengths and the departure lounge head count. Snapshots are plain
//! data (no colours, no formatting) and serialize to JSON.

use crate::models::{AirportState, Flight, FlightStatus};
use serde::{Deserialize, Serialize};

/// Complete status view at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub tick: usize,

    /// Board order
    pub flights: Vec<FlightSnapshot>,

    pub registration_queue: usize,

    pub security_queue: usize,

    /// Ticketed, cleared, not yet on board
    pub departure_lounge: usize,
}

/// One row of the flight board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub flight_number: String,
    pub destination: String,
    pub departure_time: usize,
    pub status: FlightStatus,
    pub boarded: usize,
    pub capacity: usize,
}

impl From<&Flight> for FlightSnapshot {
    fn from(flight: &Flight) -> Self {
        FlightSnapshot {
            flight_number: flight.flight_number().to_string(),
            destination: flight.destination().to_string(),
            departure_time: flight.departure_time(),
            status: flight.status(),
            boarded: flight.boarded_count(),
            capacity: flight.capacity(),
        }
    }
}

impl StatusSnapshot {
    pub fn capture(tick: usize, state: &AirportState) -> Self {
        StatusSnapshot {
            tick,
            flights: state.flights().iter().map(FlightSnapshot::from).collect(),
            registration_queue: state.registration_queue_len(),
            security_queue: state.security_queue_len(),
            departure_lounge: state.departure_lounge_count(),
        }
    }

    pub fn flight(&self, flight_number: &str) -> Option<&FlightSnapshot> {
        self.flights.iter().find(|f| f.flight_number == flight_number)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
