//! Terminal State
//!
//! Everything the simulation mutates during a tick: the flight board, the
//! passenger roster and the two FIFO queues in front of the registration
//! desks and the security checkpoints.
//!
//! # Critical Invariants
//!
//! 1. **Roster order**: passengers are keyed by sequential id, so iterating
//!    the roster visits them in creation order (boarding tie-break).
//! 2. **Single location**: every roster passenger sits in exactly one of
//!    registration queue, security queue, departure lounge, one flight.
//! 3. **Queue validity**: every id in either queue exists in the roster.
//!
//! The departure lounge is not stored: it is the set of roster passengers
//! with a ticket, cleared security and not yet on board.

use crate::models::flight::Flight;
use crate::models::passenger::{Passenger, PassengerId};
use std::collections::{BTreeMap, VecDeque};

/// Complete terminal state
///
/// # Example
///
/// ```rust
/// use airport_simulator_core::{AirportState, Flight, Passenger, PassengerOrigin};
///
/// let flights = vec![Flight::new("PS101".to_string(), "Kyiv".to_string(), 5, 50)];
/// let mut state = AirportState::new(flights);
///
/// state.admit_passenger(Passenger::new(1, "Passenger1".to_string(), "PS101".to_string(), 0, PassengerOrigin::Manual));
/// assert_eq!(state.registration_queue_len(), 1);
/// assert_eq!(state.departure_lounge_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct AirportState {
    /// Flight board, fixed order
    flights: Vec<Flight>,

    /// Active passengers by id
    roster: BTreeMap<PassengerId, Passenger>,

    /// Waiting for a registration desk
    registration_queue: VecDeque<PassengerId>,

    /// Waiting for a security checkpoint
    security_queue: VecDeque<PassengerId>,
}

impl AirportState {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self {
            flights,
            roster: BTreeMap::new(),
            registration_queue: VecDeque::new(),
            security_queue: VecDeque::new(),
        }
    }

    // ========================================================================
    // Flights
    // ========================================================================

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn get_flight(&self, flight_number: &str) -> Option<&Flight> {
        self.flights
            .iter()
            .find(|f| f.flight_number() == flight_number)
    }

    pub fn get_flight_mut(&mut self, flight_number: &str) -> Option<&mut Flight> {
        self.flights
            .iter_mut()
            .find(|f| f.flight_number() == flight_number)
    }

    // ========================================================================
    // Roster
    // ========================================================================

    /// Add a newly arrived passenger to the roster and the registration queue
    ///
    /// # Panics
    ///
    /// Panics if the passenger id is already in use
    pub fn admit_passenger(&mut self, passenger: Passenger) {
        let id = passenger.id();
        assert!(
            !self.roster.contains_key(&id),
            "Passenger ID {} already exists",
            id
        );
        self.roster.insert(id, passenger);
        self.registration_queue.push_back(id);
    }

    pub fn get_passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.roster.get(&id)
    }

    pub fn get_passenger_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.roster.get_mut(&id)
    }

    /// Drop a passenger from the roster (after their flight leaves)
    pub fn remove_passenger(&mut self, id: PassengerId) -> Option<Passenger> {
        self.roster.remove(&id)
    }

    /// Roster in creation order
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.roster.values()
    }

    pub fn num_passengers(&self) -> usize {
        self.roster.len()
    }

    // ========================================================================
    // Queues
    // ========================================================================

    pub fn registration_queue(&self) -> &VecDeque<PassengerId> {
        &self.registration_queue
    }

    pub fn security_queue(&self) -> &VecDeque<PassengerId> {
        &self.security_queue
    }

    pub fn registration_queue_len(&self) -> usize {
        self.registration_queue.len()
    }

    pub fn security_queue_len(&self) -> usize {
        self.security_queue.len()
    }

    pub fn pop_registration(&mut self) -> Option<PassengerId> {
        self.registration_queue.pop_front()
    }

    pub fn push_security(&mut self, id: PassengerId) {
        self.security_queue.push_back(id);
    }

    pub fn pop_security(&mut self) -> Option<PassengerId> {
        self.security_queue.pop_front()
    }

    // ========================================================================
    // Departure lounge (derived)
    // ========================================================================

    pub fn departure_lounge_count(&self) -> usize {
        self.roster
            .values()
            .filter(|p| p.in_departure_lounge())
            .count()
    }

    /// Lounge passengers for one flight, creation order, at most `limit`
    pub fn ready_to_board(&self, flight_number: &str, limit: usize) -> Vec<PassengerId> {
        self.roster
            .values()
            .filter(|p| p.is_ready_for(flight_number))
            .take(limit)
            .map(|p| p.id())
            .collect()
    }
}
