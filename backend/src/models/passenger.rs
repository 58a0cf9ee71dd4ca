//! Passenger model
//!
//! A passenger walks a one-way path through the terminal:
//! registration desk → security checkpoint → departure lounge → aircraft.
//! Each step sets one flag and the flags only ever switch on, in order:
//! `is_on_board ⇒ passed_security ⇒ has_ticket`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sequential passenger identifier; ordering equals creation order
pub type PassengerId = usize;

/// How the passenger entered the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerOrigin {
    /// Spawned by the per-tick arrival draw
    Random,
    /// Created by an explicit `add` command
    Manual,
}

/// Where a passenger currently is in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerStage {
    AwaitingRegistration,
    AwaitingSecurity,
    Lounge,
    OnBoard,
}

/// Errors raised when a flag change would break the flag ordering
#[derive(Debug, Error, PartialEq)]
pub enum PassengerError {
    #[error("Passenger {0} already holds a ticket")]
    AlreadyTicketed(PassengerId),

    #[error("Passenger {0} cannot pass security without a ticket")]
    NoTicket(PassengerId),

    #[error("Passenger {0} already passed security")]
    AlreadyCleared(PassengerId),

    #[error("Passenger {0} cannot board before clearing security")]
    NotCleared(PassengerId),

    #[error("Passenger {0} is already on board")]
    AlreadyOnBoard(PassengerId),
}

/// A passenger assigned to one flight
///
/// # Example
/// ```
/// use airport_simulator_core::{Passenger, PassengerOrigin};
///
/// let mut p = Passenger::new(1, "Passenger42".to_string(), "PS101".to_string(), 0, PassengerOrigin::Random);
/// p.issue_ticket().unwrap();
/// p.pass_security().unwrap();
/// assert!(p.in_departure_lounge());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    flight_number: String,
    has_ticket: bool,
    passed_security: bool,
    is_on_board: bool,
    arrival_tick: usize,
    origin: PassengerOrigin,
}

impl Passenger {
    pub fn new(
        id: PassengerId,
        name: String,
        flight_number: String,
        arrival_tick: usize,
        origin: PassengerOrigin,
    ) -> Self {
        Self {
            id,
            name,
            flight_number,
            has_ticket: false,
            passed_security: false,
            is_on_board: false,
            arrival_tick,
            origin,
        }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn has_ticket(&self) -> bool {
        self.has_ticket
    }

    pub fn passed_security(&self) -> bool {
        self.passed_security
    }

    pub fn is_on_board(&self) -> bool {
        self.is_on_board
    }

    pub fn arrival_tick(&self) -> usize {
        self.arrival_tick
    }

    pub fn origin(&self) -> PassengerOrigin {
        self.origin
    }

    /// Ticketed, cleared and still on the ground
    pub fn in_departure_lounge(&self) -> bool {
        self.has_ticket && self.passed_security && !self.is_on_board
    }

    /// Can board `flight_number` right now
    pub fn is_ready_for(&self, flight_number: &str) -> bool {
        self.flight_number == flight_number && self.in_departure_lounge()
    }

    pub fn stage(&self) -> PassengerStage {
        match (self.has_ticket, self.passed_security, self.is_on_board) {
            (false, _, _) => PassengerStage::AwaitingRegistration,
            (true, false, _) => PassengerStage::AwaitingSecurity,
            (true, true, false) => PassengerStage::Lounge,
            (true, true, true) => PassengerStage::OnBoard,
        }
    }

    /// Registration desk: hand out the ticket
    pub fn issue_ticket(&mut self) -> Result<(), PassengerError> {
        if self.has_ticket {
            return Err(PassengerError::AlreadyTicketed(self.id));
        }
        self.has_ticket = true;
        Ok(())
    }

    /// Security checkpoint: clear the passenger
    pub fn pass_security(&mut self) -> Result<(), PassengerError> {
        if !self.has_ticket {
            return Err(PassengerError::NoTicket(self.id));
        }
        if self.passed_security {
            return Err(PassengerError::AlreadyCleared(self.id));
        }
        self.passed_security = true;
        Ok(())
    }

    /// Gate: mark the passenger as seated
    pub fn board(&mut self) -> Result<(), PassengerError> {
        if !self.passed_security {
            return Err(PassengerError::NotCleared(self.id));
        }
        if self.is_on_board {
            return Err(PassengerError::AlreadyOnBoard(self.id));
        }
        self.is_on_board = true;
        Ok(())
    }
}
