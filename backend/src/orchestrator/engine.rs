//! Orchestrator Engine
//!
//! Main simulation loop integrating all terminal stages:
//! - Passenger arrivals (seeded coin flip per tick)
//! - Registration desks (FIFO, N desks in parallel)
//! - Security checkpoints (FIFO, M checkpoints in parallel)
//! - Gate processing (boarding window, boarding, departure)
//! - Event logging (complete simulation history)
//!
//! # Architecture
//!
//! ```text
//! For each tick t:
//! 0. Advance time (t is the new tick for everything below)
//! 1. Maybe spawn one passenger for a random flight
//! 2. Registration: up to `registration_desks` passengers get tickets
//! 3. Security: up to `security_points` passengers are cleared
//! 4. Flights, in board order:
//!    a. t == departure - 2 and OnTime → Boarding
//!    b. t == departure → Departed, boarded passengers leave the roster
//!    c. Boarding → seat up to `boarding_speed` lounge passengers (capacity-clamped)
//! 5. Log events, return snapshot
//! ```
//!
//! # Example
//!
//! ```rust
//! use airport_simulator_core::orchestrator::{Orchestrator, OrchestratorConfig};
//!
//! let config = OrchestratorConfig {
//!     rng_seed: 12345,
//!     ..OrchestratorConfig::default()
//! };
//! let mut orchestrator = Orchestrator::new(config).unwrap();
//!
//! for _ in 0..5 {
//!     let result = orchestrator.tick().unwrap();
//!     println!("Tick {}: {} events", result.tick, result.events.len());
//! }
//! assert_eq!(orchestrator.current_tick(), 5);
//! ```

use crate::arrivals::{ArrivalConfig, ArrivalGenerator};
use crate::core::time::TimeManager;
use crate::models::event::{Event, EventLog};
use crate::models::{AirportState, Flight, Passenger, PassengerId};
use crate::orchestrator::snapshot::StatusSnapshot;
use crate::rng::{RandomSource, RngManager};
use crate::terminal::{self, TerminalError};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;
use tracing::{debug, info};

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete orchestrator configuration
///
/// `Default` is the stock airport: three desks, two checkpoints, five
/// boardings per tick per flight, a 50% arrival chance and the fixed
/// three-flight schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// RNG seed for deterministic simulation
    pub rng_seed: u64,

    /// Flight board, in processing order
    pub flights: Vec<FlightConfig>,

    /// Passengers served by registration per tick
    pub registration_desks: usize,

    /// Passengers cleared by security per tick
    pub security_points: usize,

    /// Passengers seated per flight per tick
    pub boarding_speed: usize,

    pub arrival_config: ArrivalConfig,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            rng_seed: 0,
            flights: FlightConfig::default_schedule(),
            registration_desks: 3,
            security_points: 2,
            boarding_speed: 5,
            arrival_config: ArrivalConfig::default(),
        }
    }
}

/// One scheduled flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightConfig {
    pub flight_number: String,
    pub destination: String,
    /// Absolute departure tick
    pub departure_time: usize,
    pub capacity: usize,
}

impl FlightConfig {
    pub fn new(flight_number: &str, destination: &str, departure_time: usize, capacity: usize) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            destination: destination.to_string(),
            departure_time,
            capacity,
        }
    }

    /// PS101 → Kyiv, PS202 → London, PS303 → New York
    pub fn default_schedule() -> Vec<FlightConfig> {
        vec![
            FlightConfig::new("PS101", "Kyiv", 5, 50),
            FlightConfig::new("PS202", "London", 8, 40),
            FlightConfig::new("PS303", "New York", 12, 60),
        ]
    }
}

// ============================================================================
// Results and Errors
// ============================================================================

/// Result of a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Tick number (after advancing)
    pub tick: usize,

    /// Events produced this tick, in order
    pub events: Vec<Event>,

    /// Terminal status at the end of the tick
    pub snapshot: StatusSnapshot,
}

impl TickResult {
    pub fn num_arrivals(&self) -> usize {
        self.count("PassengerArrived")
    }

    pub fn num_boarded(&self) -> usize {
        self.count("Boarded")
    }

    /// Flight numbers that departed this tick
    pub fn departures(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Departed { flight_number, .. } => Some(flight_number.as_str()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, event_type: &str) -> usize {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .count()
    }
}

/// Simulation error types
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] TerminalError),
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Main orchestrator managing terminal state and the tick loop
///
/// # Determinism
///
/// All randomness comes from the injected [`RandomSource`]. With the
/// default [`RngManager`], same seed + same command sequence = identical
/// events and snapshots.
pub struct Orchestrator {
    /// Flights, roster, queues
    state: AirportState,

    time_manager: TimeManager,

    rng: Box<dyn RandomSource>,

    arrival_generator: ArrivalGenerator,

    registration_desks: usize,

    security_points: usize,

    boarding_speed: usize,

    /// Event log (all simulation events)
    event_log: EventLog,
}

impl Orchestrator {
    /// Create new orchestrator seeded from `config.rng_seed`
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidConfig` if the configuration is unusable
    pub fn new(config: OrchestratorConfig) -> Result<Self, SimulationError> {
        let rng = Box::new(RngManager::new(config.rng_seed));
        Self::with_random_source(config, rng)
    }

    /// Create new orchestrator drawing from a caller-supplied random source
    ///
    /// `config.rng_seed` is ignored.
    pub fn with_random_source(
        config: OrchestratorConfig,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let flights: Vec<Flight> = config
            .flights
            .iter()
            .map(|fc| {
                Flight::new(
                    fc.flight_number.clone(),
                    fc.destination.clone(),
                    fc.departure_time,
                    fc.capacity,
                )
            })
            .collect();

        info!(
            flights = flights.len(),
            desks = config.registration_desks,
            checkpoints = config.security_points,
            "simulation initialised"
        );

        Ok(Self {
            state: AirportState::new(flights),
            time_manager: TimeManager::new(),
            rng,
            arrival_generator: ArrivalGenerator::new(config.arrival_config),
            registration_desks: config.registration_desks,
            security_points: config.security_points,
            boarding_speed: config.boarding_speed,
            event_log: EventLog::new(),
        })
    }

    fn validate_config(config: &OrchestratorConfig) -> Result<(), SimulationError> {
        if config.flights.is_empty() {
            return Err(SimulationError::InvalidConfig(
                "Must have at least one flight".to_string(),
            ));
        }

        let mut numbers = HashSet::new();
        for flight in &config.flights {
            if !numbers.insert(&flight.flight_number) {
                return Err(SimulationError::InvalidConfig(format!(
                    "Duplicate flight number: {}",
                    flight.flight_number
                )));
            }
            if flight.capacity == 0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "Flight {} must have capacity > 0",
                    flight.flight_number
                )));
            }
        }

        if config.registration_desks == 0 {
            return Err(SimulationError::InvalidConfig(
                "registration_desks must be > 0".to_string(),
            ));
        }
        if config.security_points == 0 {
            return Err(SimulationError::InvalidConfig(
                "security_points must be > 0".to_string(),
            ));
        }
        if config.boarding_speed == 0 {
            return Err(SimulationError::InvalidConfig(
                "boarding_speed must be > 0".to_string(),
            ));
        }

        let arrivals = &config.arrival_config;
        if !(0.0..=1.0).contains(&arrivals.probability) {
            return Err(SimulationError::InvalidConfig(format!(
                "arrival probability must be within [0, 1], got {}",
                arrivals.probability
            )));
        }
        if arrivals.name_suffix_range == 0 {
            return Err(SimulationError::InvalidConfig(
                "name_suffix_range must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn current_tick(&self) -> usize {
        self.time_manager.current_tick()
    }

    pub fn state(&self) -> &AirportState {
        &self.state
    }

    pub fn flights(&self) -> &[Flight] {
        self.state.flights()
    }

    pub fn flight(&self, flight_number: &str) -> Option<&Flight> {
        self.state.get_flight(flight_number)
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.state.get_passenger(id)
    }

    /// Active roster in creation order
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.state.passengers()
    }

    pub fn registration_queue(&self) -> &VecDeque<PassengerId> {
        self.state.registration_queue()
    }

    pub fn security_queue(&self) -> &VecDeque<PassengerId> {
        self.state.security_queue()
    }

    pub fn event_count(&self) -> usize {
        self.event_log.len()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Current terminal status; no mutation
    pub fn status_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot::capture(self.current_tick(), &self.state)
    }

    /// Create one manual passenger for a random flight
    ///
    /// The passenger joins the registration queue and is processed on the
    /// next tick. Returns the arrival event (also logged).
    pub fn add_passenger(&mut self) -> Event {
        let tick = self.current_tick();
        let passenger =
            self.arrival_generator
                .generate_manual(tick, self.state.flights(), self.rng.as_mut());
        self.admit(passenger)
    }

    /// Create one manual passenger for a chosen flight
    ///
    /// Skips the random flight draw, so it does not consume randomness.
    pub fn inject_passenger(&mut self, flight_number: &str) -> Result<PassengerId, SimulationError> {
        if self.state.get_flight(flight_number).is_none() {
            return Err(SimulationError::FlightNotFound(flight_number.to_string()));
        }
        let tick = self.current_tick();
        let passenger = self.arrival_generator.generate_for_flight(tick, flight_number);
        let id = passenger.id();
        self.admit(passenger);
        Ok(id)
    }

    /// Execute one simulation tick
    ///
    /// # Returns
    ///
    /// * `Ok(TickResult)` - events of this tick and the resulting snapshot
    /// * `Err(SimulationError)` - terminal state was inconsistent
    pub fn tick(&mut self) -> Result<TickResult, SimulationError> {
        // STEP 0: ADVANCE TIME
        self.time_manager.advance_tick();
        let tick = self.current_tick();
        let mut events = Vec::new();

        // STEP 1: ARRIVAL
        if let Some(passenger) = self.arrival_generator.generate_random(
            tick,
            self.state.flights(),
            self.rng.as_mut(),
        ) {
            events.push(self.admit(passenger));
        }

        // STEP 2: REGISTRATION
        let registered =
            terminal::process_registration(&mut self.state, self.registration_desks, tick)?;
        self.log_all(&registered);
        events.extend(registered);

        // STEP 3: SECURITY
        let cleared = terminal::process_security(&mut self.state, self.security_points, tick)?;
        self.log_all(&cleared);
        events.extend(cleared);

        // STEP 4: FLIGHTS (sequential, board order)
        let gate = terminal::update_flights(&mut self.state, &self.time_manager, self.boarding_speed)?;
        self.log_all(&gate);
        events.extend(gate);

        debug!(tick, events = events.len(), roster = self.state.num_passengers(), "tick complete");

        Ok(TickResult {
            tick,
            events,
            snapshot: self.status_snapshot(),
        })
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn admit(&mut self, passenger: Passenger) -> Event {
        let event = Event::PassengerArrived {
            tick: self.current_tick(),
            passenger_id: passenger.id(),
            name: passenger.name().to_string(),
            flight_number: passenger.flight_number().to_string(),
            origin: passenger.origin(),
        };
        debug!(passenger = passenger.name(), flight = passenger.flight_number(), "passenger arrived");
        self.state.admit_passenger(passenger);
        self.event_log.log(event.clone());
        event
    }

    fn log_all(&mut self, events: &[Event]) {
        for event in events {
            self.event_log.log(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightStatus;

    fn quiet_config() -> OrchestratorConfig {
        OrchestratorConfig {
            rng_seed: 42,
            arrival_config: ArrivalConfig {
                probability: 0.0,
                ..ArrivalConfig::default()
            },
            ..OrchestratorConfig::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Orchestrator::new(OrchestratorConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_empty_flight_list() {
        let config = OrchestratorConfig {
            flights: vec![],
            ..OrchestratorConfig::default()
        };
        assert!(matches!(
            Orchestrator::new(config),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_flight_numbers() {
        let config = OrchestratorConfig {
            flights: vec![
                FlightConfig::new("PS101", "Kyiv", 5, 50),
                FlightConfig::new("PS101", "Odesa", 7, 20),
            ],
            ..OrchestratorConfig::default()
        };
        let err = Orchestrator::new(config).err().unwrap();
        assert_eq!(
            err,
            SimulationError::InvalidConfig("Duplicate flight number: PS101".to_string())
        );
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let config = OrchestratorConfig {
            arrival_config: ArrivalConfig {
                probability: 1.5,
                ..ArrivalConfig::default()
            },
            ..OrchestratorConfig::default()
        };
        assert!(Orchestrator::new(config).is_err());
    }

    #[test]
    fn test_tick_advances_clock_first() {
        let mut orchestrator = Orchestrator::new(quiet_config()).unwrap();
        let result = orchestrator.tick().unwrap();
        assert_eq!(result.tick, 1);
        assert_eq!(result.snapshot.tick, 1);
        assert_eq!(orchestrator.current_tick(), 1);
    }

    #[test]
    fn test_add_passenger_waits_for_next_tick() {
        let mut orchestrator = Orchestrator::new(quiet_config()).unwrap();
        let event = orchestrator.add_passenger();

        assert_eq!(event.event_type(), "PassengerArrived");
        assert_eq!(orchestrator.registration_queue().len(), 1);
        assert_eq!(orchestrator.event_count(), 1);

        orchestrator.tick().unwrap();
        assert_eq!(orchestrator.registration_queue().len(), 0);
        // registered then cleared in the same tick
        assert_eq!(orchestrator.status_snapshot().departure_lounge, 1);
    }

    #[test]
    fn test_inject_unknown_flight() {
        let mut orchestrator = Orchestrator::new(quiet_config()).unwrap();
        assert_eq!(
            orchestrator.inject_passenger("XX000"),
            Err(SimulationError::FlightNotFound("XX000".to_string()))
        );
    }

    #[test]
    fn test_injected_passenger_boards_and_departs() {
        let mut orchestrator = Orchestrator::new(quiet_config()).unwrap();
        let id = orchestrator.inject_passenger("PS101").unwrap();

        for _ in 0..3 {
            orchestrator.tick().unwrap();
        }
        assert_eq!(orchestrator.flight("PS101").unwrap().status(), FlightStatus::Boarding);
        assert!(orchestrator.passenger(id).unwrap().is_on_board());

        orchestrator.tick().unwrap();
        let result = orchestrator.tick().unwrap();
        assert_eq!(result.departures(), vec!["PS101"]);
        assert!(orchestrator.passenger(id).is_none());
    }
}
