//! Interpreter commands

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tick,
    Add,
    Status,
    Help,
    Exit,
    /// Anything unrecognised, kept verbatim for the error message
    Unknown(String),
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "tick" => Command::Tick,
            "add" => Command::Add,
            "status" => Command::Status,
            "help" => Command::Help,
            "exit" => Command::Exit,
            _ => Command::Unknown(line.trim().to_string()),
        }
    }
}

pub const HELP: &[(&str, &str)] = &[
    ("tick", "advance the simulation one step"),
    ("add", "add a passenger manually"),
    ("status", "show flights and queues"),
    ("help", "show this command list"),
    ("exit", "leave the simulation"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Command::from("  TICK \n"), Command::Tick);
        assert_eq!(Command::from("Status"), Command::Status);
        assert_eq!(Command::from("exit"), Command::Exit);
    }

    #[test]
    fn test_unknown_keeps_input() {
        assert_eq!(
            Command::from("fly me"),
            Command::Unknown("fly me".to_string())
        );
    }
}
