//! Interactive command loop
//!
//! Reads one command per line until `exit` or end of input. Bad input is
//! reported and the loop carries on.

use crate::command::Command;
use crate::render::Renderer;
use airport_simulator_core::Orchestrator;
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

pub fn run(
    orchestrator: &mut Orchestrator,
    input: impl BufRead,
    out: &mut impl Write,
    renderer: Renderer,
) -> io::Result<()> {
    writeln!(out, "Airport simulation started!")?;
    writeln!(out, "Type 'help' for the list of commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "\nCommand: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            debug!("end of input");
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = Command::from(line.as_str());
        debug!(?command, "command received");

        match command {
            Command::Tick => match orchestrator.tick() {
                Ok(result) => {
                    for event in &result.events {
                        renderer.event(out, event)?;
                    }
                    renderer.snapshot(out, &result.snapshot)?;
                }
                Err(e) => {
                    error!(error = %e, "tick failed");
                    writeln!(out, "Tick failed: {}", e)?;
                }
            },
            Command::Add => {
                let event = orchestrator.add_passenger();
                renderer.event(out, &event)?;
            }
            Command::Status => renderer.snapshot(out, &orchestrator.status_snapshot())?,
            Command::Help => renderer.help(out)?,
            Command::Exit => break,
            Command::Unknown(text) => {
                writeln!(
                    out,
                    "Unknown command '{}'. Type 'help' for the list of commands.",
                    text
                )?;
            }
        }
    }

    writeln!(out, "Simulation finished.")
}
