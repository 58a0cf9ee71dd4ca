//! Flight model
//!
//! A flight is scheduled at an absolute departure tick and moves through
//! `OnTime → Boarding → Departed`. Status never moves backwards; a flight
//! may skip `Boarding` when its schedule leaves no room for it.

use crate::models::passenger::PassengerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Flight status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    /// Scheduled, gate not open yet
    OnTime,
    /// Gate open, lounge passengers are being seated
    Boarding,
    /// Gone; terminal state
    Departed,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightStatus::OnTime => "OnTime",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Departed => "Departed",
        };
        f.write_str(label)
    }
}

/// Errors that can occur during flight operations
#[derive(Debug, Error, PartialEq)]
pub enum FlightError {
    #[error("Flight {flight}: cannot move from {from} to {to}")]
    InvalidTransition {
        flight: String,
        from: FlightStatus,
        to: FlightStatus,
    },

    #[error("Flight {flight} is full ({capacity} seats)")]
    CapacityExceeded { flight: String, capacity: usize },

    #[error("Flight {flight} is not boarding (status {status})")]
    NotBoarding { flight: String, status: FlightStatus },
}

/// A scheduled flight
///
/// # Example
/// ```
/// use airport_simulator_core::{Flight, FlightStatus};
///
/// let mut flight = Flight::new("PS101".to_string(), "Kyiv".to_string(), 5, 50);
/// flight.transition_to(FlightStatus::Boarding).unwrap();
/// flight.board_passenger(1).unwrap();
/// assert_eq!(flight.boarded_count(), 1);
/// assert_eq!(flight.remaining_seats(), 49);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    flight_number: String,
    destination: String,
    departure_time: usize,
    capacity: usize,
    status: FlightStatus,
    /// Boarding order
    passengers_on_board: Vec<PassengerId>,
}

impl Flight {
    pub fn new(flight_number: String, destination: String, departure_time: usize, capacity: usize) -> Self {
        Self {
            flight_number,
            destination,
            departure_time,
            capacity,
            status: FlightStatus::OnTime,
            passengers_on_board: Vec::new(),
        }
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure_time(&self) -> usize {
        self.departure_time
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    pub fn passengers_on_board(&self) -> &[PassengerId] {
        &self.passengers_on_board
    }

    pub fn boarded_count(&self) -> usize {
        self.passengers_on_board.len()
    }

    pub fn remaining_seats(&self) -> usize {
        self.capacity.saturating_sub(self.passengers_on_board.len())
    }

    pub fn is_departed(&self) -> bool {
        self.status == FlightStatus::Departed
    }

    /// Move to `next`; only strictly forward moves are accepted
    pub fn transition_to(&mut self, next: FlightStatus) -> Result<(), FlightError> {
        if next <= self.status {
            return Err(FlightError::InvalidTransition {
                flight: self.flight_number.clone(),
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Seat one passenger
    pub fn board_passenger(&mut self, passenger_id: PassengerId) -> Result<(), FlightError> {
        if self.status != FlightStatus::Boarding {
            return Err(FlightError::NotBoarding {
                flight: self.flight_number.clone(),
                status: self.status,
            });
        }
        if self.remaining_seats() == 0 {
            return Err(FlightError::CapacityExceeded {
                flight: self.flight_number.clone(),
                capacity: self.capacity,
            });
        }
        self.passengers_on_board.push(passenger_id);
        Ok(())
    }
}
