//! Console rendering of events and snapshots
//!
//! The engine hands back plain data; colours live here only.

use airport_simulator_core::{Event, FlightStatus, PassengerOrigin, StatusSnapshot};
use std::io::{self, Write};

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub color: bool,
    pub json: bool,
}

impl Renderer {
    pub fn event(&self, out: &mut impl Write, event: &Event) -> io::Result<()> {
        match event {
            Event::PassengerArrived {
                name,
                flight_number,
                origin,
                ..
            } => match origin {
                PassengerOrigin::Random => {
                    writeln!(out, "New passenger {} for flight {}", name, flight_number)
                }
                PassengerOrigin::Manual => {
                    writeln!(out, "Added passenger {} for flight {}", name, flight_number)
                }
            },
            Event::Registered {
                name, flight_number, ..
            } => writeln!(out, "{} registered for flight {}", name, flight_number),
            Event::SecurityCleared { name, .. } => {
                writeln!(out, "{} passed security control", name)
            }
            Event::BoardingStarted { flight_number, .. } => {
                writeln!(out, "Boarding started for flight {}", flight_number)
            }
            Event::Boarded {
                name, flight_number, ..
            } => writeln!(out, "{} boarded flight {}", name, flight_number),
            Event::Departed {
                flight_number,
                destination,
                ..
            } => writeln!(out, "Flight {} to {} has departed!", flight_number, destination),
        }
    }

    pub fn snapshot(&self, out: &mut impl Write, snapshot: &StatusSnapshot) -> io::Result<()> {
        if self.json {
            let json = snapshot
                .to_json()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            return writeln!(out, "{}", json);
        }

        writeln!(out)?;
        writeln!(out, "Time: {}", snapshot.tick)?;
        for flight in &snapshot.flights {
            let line = format!(
                "Flight {} -> {} | Status: {} | On board: {}/{}",
                flight.flight_number,
                flight.destination,
                flight.status,
                flight.boarded,
                flight.capacity
            );
            if self.color {
                writeln!(out, "{}{}{}", status_color(flight.status), line, RESET)?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        writeln!(out, "Registration queue: {}", snapshot.registration_queue)?;
        writeln!(out, "Security queue: {}", snapshot.security_queue)?;
        writeln!(out, "Waiting in departure lounge: {}", snapshot.departure_lounge)
    }

    pub fn help(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Available commands:")?;
        for (name, description) in crate::command::HELP {
            writeln!(out, "{:<7}- {}", name, description)?;
        }
        Ok(())
    }
}

fn status_color(status: FlightStatus) -> &'static str {
    match status {
        FlightStatus::OnTime => GREEN,
        FlightStatus::Boarding => YELLOW,
        FlightStatus::Departed => RED,
    }
}
