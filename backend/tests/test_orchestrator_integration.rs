//! Integration tests for the Orchestrator tick loop
//!
//! These drive the engine through its public operations only:
//! `tick`, `add_passenger`, `status_snapshot`.

use airport_simulator_core::{
    ArrivalConfig, Event, FlightStatus, Orchestrator, OrchestratorConfig, PassengerOrigin,
};

/// Stock airport with the arrival coin flip disabled
fn create_quiet_config() -> OrchestratorConfig {
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
fn test_initial_snapshot() {
    let orchestrator = Orchestrator::new(create_quiet_config()).unwrap();
    let snapshot = orchestrator.status_snapshot();

    assert_eq!(snapshot.tick, 0);
    assert_eq!(snapshot.flights.len(), 3);
    assert_eq!(snapshot.registration_queue, 0);
    assert_eq!(snapshot.security_queue, 0);
    assert_eq!(snapshot.departure_lounge, 0);

    let numbers: Vec<&str> = snapshot
        .flights
        .iter()
        .map(|f| f.flight_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["PS101", "PS202", "PS303"]);
    assert!(snapshot.flights.iter().all(|f| f.status == FlightStatus::OnTime));
}

#[test]
fn test_schedule_without_passengers() {
    let mut orchestrator = Orchestrator::new(create_quiet_config()).unwrap();

    for _ in 0..3 {
        orchestrator.tick().unwrap();
    }
    let at_three = orchestrator.status_snapshot();
    assert_eq!(at_three.tick, 3);
    assert_eq!(at_three.flight("PS101").unwrap().status, FlightStatus::Boarding);
    assert_eq!(at_three.flight("PS202").unwrap().status, FlightStatus::OnTime);
    assert_eq!(at_three.flight("PS303").unwrap().status, FlightStatus::OnTime);

    orchestrator.tick().unwrap();
    let result = orchestrator.tick().unwrap();
    assert_eq!(result.tick, 5);
    assert_eq!(result.departures(), vec!["PS101"]);
    assert_eq!(result.snapshot.flight("PS101").unwrap().status, FlightStatus::Departed);
    assert_eq!(result.snapshot.flight("PS202").unwrap().status, FlightStatus::OnTime);
    assert_eq!(result.snapshot.flight("PS303").unwrap().status, FlightStatus::OnTime);
}

#[test]
fn test_full_schedule_runs_to_completion() {
    let mut orchestrator = Orchestrator::new(create_quiet_config()).unwrap();

    let mut departed_at = Vec::new();
    for _ in 0..15 {
        let result = orchestrator.tick().unwrap();
        for number in result.departures() {
            departed_at.push((number.to_string(), result.tick));
        }
    }

    assert_eq!(
        departed_at,
        vec![
            ("PS101".to_string(), 5),
            ("PS202".to_string(), 8),
            ("PS303".to_string(), 12),
        ]
    );
    assert!(orchestrator.flights().iter().all(|f| f.is_departed()));
}

#[test]
fn test_status_snapshot_is_idempotent() {
    let mut orchestrator = Orchestrator::new(OrchestratorConfig {
        rng_seed: 5,
        ..OrchestratorConfig::default()
    })
    .unwrap();
    for _ in 0..4 {
        orchestrator.add_passenger();
        orchestrator.tick().unwrap();
    }

    let events_before = orchestrator.event_count();
    let first = orchestrator.status_snapshot();
    let second = orchestrator.status_snapshot();

    assert_eq!(first, second);
    assert_eq!(orchestrator.event_count(), events_before);
}

#[test]
fn test_tick_result_snapshot_matches_status() {
    let mut orchestrator = Orchestrator::new(OrchestratorConfig {
        rng_seed: 11,
        ..OrchestratorConfig::default()
    })
    .unwrap();
    orchestrator.add_passenger();

    let result = orchestrator.tick().unwrap();
    assert_eq!(result.snapshot, orchestrator.status_snapshot());
}

#[test]
fn test_add_passenger_is_manual_and_queued() {
    let mut orchestrator = Orchestrator::new(create_quiet_config()).unwrap();
    let event = orchestrator.add_passenger();

    match event {
        Event::PassengerArrived {
            tick,
            passenger_id,
            ref name,
            ref flight_number,
            origin,
        } => {
            assert_eq!(tick, 0);
            assert_eq!(origin, PassengerOrigin::Manual);
            assert!(name.starts_with("UserPassenger"));
            assert!(orchestrator.flight(flight_number).is_some());
            assert_eq!(orchestrator.registration_queue().front(), Some(&passenger_id));
        }
        other => panic!("unexpected event {:?}", other),
    }

    // no other immediate effect
    assert_eq!(orchestrator.current_tick(), 0);
    assert_eq!(orchestrator.status_snapshot().security_queue, 0);
}

#[test]
fn test_random_arrivals_always_when_probability_one() {
    let mut orchestrator = Orchestrator::new(OrchestratorConfig {
        rng_seed: 3,
        arrival_config: ArrivalConfig {
            probability: 1.0,
            ..ArrivalConfig::default()
        },
        ..OrchestratorConfig::default()
    })
    .unwrap();

    for _ in 0..4 {
        let result = orchestrator.tick().unwrap();
        assert_eq!(result.num_arrivals(), 1);
        match &result.events[0] {
            Event::PassengerArrived { origin, name, .. } => {
                assert_eq!(*origin, PassengerOrigin::Random);
                assert!(name.starts_with("Passenger"));
            }
            other => panic!("arrival must come first, got {:?}", other),
        }
    }
}

#[test]
fn test_events_follow_stage_order_within_tick() {
    let mut orchestrator = Orchestrator::new(create_quiet_config()).unwrap();
    orchestrator.inject_passenger("PS101").unwrap();
    orchestrator.inject_passenger("PS101").unwrap();

    let result = orchestrator.tick().unwrap();
    let kinds: Vec<&str> = result.events.iter().map(|e| e.event_type()).collect();
    assert_eq!(
        kinds,
        vec!["Registered", "Registered", "SecurityCleared", "SecurityCleared"]
    );
}

#[test]
fn test_event_log_accumulates_across_ticks() {
    let mut orchestrator = Orchestrator::new(create_quiet_config()).unwrap();
    let id = orchestrator.inject_passenger("PS101").unwrap();

    for _ in 0..5 {
        orchestrator.tick().unwrap();
    }

    let history: Vec<&str> = orchestrator
        .event_log()
        .events_for_passenger(id)
        .iter()
        .map(|e| e.event_type())
        .collect();
    assert_eq!(
        history,
        vec!["PassengerArrived", "Registered", "SecurityCleared", "Boarded"]
    );
    assert_eq!(orchestrator.event_log().events_of_type("Departed").len(), 1);
    assert_eq!(orchestrator.event_log().events_of_type("BoardingStarted").len(), 1);
}
