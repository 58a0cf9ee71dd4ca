//! Registration desks and security checkpoints
//!
//! Both stages model N parallel stations that each take one passenger from
//! the head of their queue per tick.

use super::TerminalError;
use crate::models::{AirportState, Event};
use tracing::debug;

/// Serve up to `desks` passengers from the registration queue
///
/// Each served passenger gets a ticket and joins the back of the
/// security queue.
pub fn process_registration(
    state: &mut AirportState,
    desks: usize,
    tick: usize,
) -> Result<Vec<Event>, TerminalError> {
    let mut events = Vec::new();

    for _ in 0..desks {
        let Some(id) = state.pop_registration() else {
            break;
        };
        let passenger = state
            .get_passenger_mut(id)
            .ok_or(TerminalError::PassengerNotFound(id))?;
        passenger.issue_ticket()?;

        events.push(Event::Registered {
            tick,
            passenger_id: id,
            name: passenger.name().to_string(),
            flight_number: passenger.flight_number().to_string(),
        });
        state.push_security(id);
    }

    debug!(
        tick,
        served = events.len(),
        waiting = state.registration_queue_len(),
        "registration processed"
    );
    Ok(events)
}

/// Clear up to `points` passengers from the security queue
///
/// Cleared passengers are not moved anywhere: their flags now place them
/// in the departure lounge.
pub fn process_security(
    state: &mut AirportState,
    points: usize,
    tick: usize,
) -> Result<Vec<Event>, TerminalError> {
    let mut events = Vec::new();

    for _ in 0..points {
        let Some(id) = state.pop_security() else {
            break;
        };
        let passenger = state
            .get_passenger_mut(id)
            .ok_or(TerminalError::PassengerNotFound(id))?;
        passenger.pass_security()?;

        events.push(Event::SecurityCleared {
            tick,
            passenger_id: id,
            name: passenger.name().to_string(),
        });
    }

    debug!(
        tick,
        cleared = events.len(),
        waiting = state.security_queue_len(),
        "security processed"
    );
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flight, Passenger, PassengerOrigin};

    fn state_with_queue(n: usize) -> AirportState {
        let mut state = AirportState::new(vec![Flight::new(
            "PS101".to_string(),
            "Kyiv".to_string(),
            5,
            50,
        )]);
        for id in 1..=n {
            state.admit_passenger(Passenger::new(
                id,
                format!("Passenger{}", id),
                "PS101".to_string(),
                0,
                PassengerOrigin::Random,
            ));
        }
        state
    }

    #[test]
    fn test_registration_is_fifo() {
        let mut state = state_with_queue(4);
        process_registration(&mut state, 3, 1).unwrap();

        let security: Vec<_> = state.security_queue().iter().copied().collect();
        assert_eq!(security, vec![1, 2, 3]);
        assert_eq!(state.registration_queue().front(), Some(&4));
    }

    #[test]
    fn test_registration_with_fewer_passengers_than_desks() {
        let mut state = state_with_queue(1);
        let events = process_registration(&mut state, 3, 1).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(state.registration_queue_len(), 0);
    }

    #[test]
    fn test_security_clears_in_order() {
        let mut state = state_with_queue(3);
        process_registration(&mut state, 3, 1).unwrap();
        let events = process_security(&mut state, 2, 1).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].passenger_id(), Some(1));
        assert_eq!(events[1].passenger_id(), Some(2));
        assert_eq!(state.security_queue_len(), 1);
        assert_eq!(state.departure_lounge_count(), 2);
    }

    #[test]
    fn test_security_on_empty_queue_is_noop() {
        let mut state = state_with_queue(0);
        let events = process_security(&mut state, 2, 1).unwrap();
        assert!(events.is_empty());
    }
}
