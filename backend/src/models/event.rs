//! Event logging for the terminal simulation.
//!
//! Every visible state change is recorded as an [`Event`], in the order it
//! happened within a tick. The front end renders them; tests query them.
//!
//! # Event Types
//!
//! - **PassengerArrived**: passenger created (random draw or `add`)
//! - **Registered**: ticket issued at a registration desk
//! - **SecurityCleared**: passenger left the security queue
//! - **BoardingStarted**: flight gate opened
//! - **Boarded**: passenger seated on a flight
//! - **Departed**: flight left, its boarded passengers exit the simulation
//!
//! # Example
//!
//! ```rust
//! use airport_simulator_core::models::{Event, EventLog, PassengerOrigin};
//!
//! let mut log = EventLog::new();
//! log.log(Event::PassengerArrived {
//!     tick: 1,
//!     passenger_id: 1,
//!     name: "Passenger512".to_string(),
//!     flight_number: "PS101".to_string(),
//!     origin: PassengerOrigin::Random,
//! });
//!
//! assert_eq!(log.events_for_flight("PS101").len(), 1);
//! ```

use crate::models::passenger::{PassengerId, PassengerOrigin};
use serde::{Deserialize, Serialize};

/// Simulation event; all variants carry the tick they happened on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    PassengerArrived {
        tick: usize,
        passenger_id: PassengerId,
        name: String,
        flight_number: String,
        origin: PassengerOrigin,
    },

    Registered {
        tick: usize,
        passenger_id: PassengerId,
        name: String,
        flight_number: String,
    },

    SecurityCleared {
        tick: usize,
        passenger_id: PassengerId,
        name: String,
    },

    BoardingStarted {
        tick: usize,
        flight_number: String,
    },

    Boarded {
        tick: usize,
        passenger_id: PassengerId,
        name: String,
        flight_number: String,
    },

    /// `passengers_on_board` is the final boarded count
    Departed {
        tick: usize,
        flight_number: String,
        destination: String,
        passengers_on_board: usize,
    },
}

impl Event {
    pub fn tick(&self) -> usize {
        match self {
            Event::PassengerArrived { tick, .. } => *tick,
            Event::Registered { tick, .. } => *tick,
            Event::SecurityCleared { tick, .. } => *tick,
            Event::BoardingStarted { tick, .. } => *tick,
            Event::Boarded { tick, .. } => *tick,
            Event::Departed { tick, .. } => *tick,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Event::PassengerArrived { .. } => "PassengerArrived",
            Event::Registered { .. } => "Registered",
            Event::SecurityCleared { .. } => "SecurityCleared",
            Event::BoardingStarted { .. } => "BoardingStarted",
            Event::Boarded { .. } => "Boarded",
            Event::Departed { .. } => "Departed",
        }
    }

    /// Passenger this event is about, if any
    pub fn passenger_id(&self) -> Option<PassengerId> {
        match self {
            Event::PassengerArrived { passenger_id, .. } => Some(*passenger_id),
            Event::Registered { passenger_id, .. } => Some(*passenger_id),
            Event::SecurityCleared { passenger_id, .. } => Some(*passenger_id),
            Event::Boarded { passenger_id, .. } => Some(*passenger_id),
            _ => None,
        }
    }

    /// Flight this event is about, if any
    ///
    /// `SecurityCleared` is not tied to a flight.
    pub fn flight_number(&self) -> Option<&str> {
        match self {
            Event::PassengerArrived { flight_number, .. } => Some(flight_number),
            Event::Registered { flight_number, .. } => Some(flight_number),
            Event::BoardingStarted { flight_number, .. } => Some(flight_number),
            Event::Boarded { flight_number, .. } => Some(flight_number),
            Event::Departed { flight_number, .. } => Some(flight_number),
            Event::SecurityCleared { .. } => None,
        }
    }
}

/// Append-only event history with simple queries
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_at_tick(&self, tick: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.tick() == tick).collect()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub fn events_for_flight(&self, flight_number: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.flight_number() == Some(flight_number))
            .collect()
    }

    pub fn events_for_passenger(&self, passenger_id: PassengerId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.passenger_id() == Some(passenger_id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
