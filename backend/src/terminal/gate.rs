//! Gate processing: schedule transitions, boarding and departure
//!
//! Flights are updated one after another in board order. A later flight
//! sees every roster change an earlier flight made in the same tick, so the
//! loop must stay sequential.

use super::TerminalError;
use crate::core::time::TimeManager;
use crate::models::{AirportState, Event, FlightStatus};
use tracing::{debug, info};

/// Gate opens this many ticks before the scheduled departure
pub const BOARDING_LEAD_TICKS: usize = 2;

/// Run the gate step for every flight, in board order
pub fn update_flights(
    state: &mut AirportState,
    time: &TimeManager,
    boarding_speed: usize,
) -> Result<Vec<Event>, TerminalError> {
    let flight_numbers: Vec<String> = state
        .flights()
        .iter()
        .map(|f| f.flight_number().to_string())
        .collect();

    let mut events = Vec::new();
    for flight_number in &flight_numbers {
        update_flight(state, flight_number, time, boarding_speed, &mut events)?;
    }
    Ok(events)
}

fn update_flight(
    state: &mut AirportState,
    flight_number: &str,
    time: &TimeManager,
    boarding_speed: usize,
    events: &mut Vec<Event>,
) -> Result<(), TerminalError> {
    let tick = time.current_tick();
    let not_found = || TerminalError::FlightNotFound(flight_number.to_string());

    let flight = state.get_flight_mut(flight_number).ok_or_else(not_found)?;

    if time.is_ticks_before(flight.departure_time(), BOARDING_LEAD_TICKS)
        && flight.status() == FlightStatus::OnTime
    {
        flight.transition_to(FlightStatus::Boarding)?;
        info!(tick, flight = flight_number, "boarding started");
        events.push(Event::BoardingStarted {
            tick,
            flight_number: flight_number.to_string(),
        });
    }

    if tick == flight.departure_time() && !flight.is_departed() {
        flight.transition_to(FlightStatus::Departed)?;
        let destination = flight.destination().to_string();
        let on_board = flight.passengers_on_board().to_vec();

        for id in &on_board {
            state.remove_passenger(*id);
        }

        info!(
            tick,
            flight = flight_number,
            destination = destination.as_str(),
            passengers = on_board.len(),
            "flight departed"
        );
        events.push(Event::Departed {
            tick,
            flight_number: flight_number.to_string(),
            destination,
            passengers_on_board: on_board.len(),
        });
        return Ok(());
    }

    if flight.status() == FlightStatus::Boarding {
        board_ready_passengers(state, flight_number, tick, boarding_speed, events)?;
    }

    Ok(())
}

/// Seat lounge passengers in roster order, bounded by speed and free seats
fn board_ready_passengers(
    state: &mut AirportState,
    flight_number: &str,
    tick: usize,
    boarding_speed: usize,
    events: &mut Vec<Event>,
) -> Result<(), TerminalError> {
    let seats = state
        .get_flight(flight_number)
        .ok_or_else(|| TerminalError::FlightNotFound(flight_number.to_string()))?
        .remaining_seats();
    let ready = state.ready_to_board(flight_number, boarding_speed.min(seats));

    for id in ready {
        state
            .get_flight_mut(flight_number)
            .ok_or_else(|| TerminalError::FlightNotFound(flight_number.to_string()))?
            .board_passenger(id)?;

        let passenger = state
            .get_passenger_mut(id)
            .ok_or(TerminalError::PassengerNotFound(id))?;
        passenger.board()?;

        events.push(Event::Boarded {
            tick,
            passenger_id: id,
            name: passenger.name().to_string(),
            flight_number: flight_number.to_string(),
        });
    }

    debug!(tick, flight = flight_number, free_seats = seats, "boarding step done");
    Ok(())
}
