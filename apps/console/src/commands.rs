use std::str::FromStr;

use thiserror::Error;

/// Commands read from stdin, one per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Refresh,
    Show,
    Sectors,
    Status,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
pub struct UnknownCommand(pub String);

impl FromStr for ConsoleCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "refresh" => Ok(Self::Refresh),
            "s" | "show" => Ok(Self::Show),
            "sectors" => Ok(Self::Sectors),
            "status" => Ok(Self::Status),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  refresh (r)   fetch simulated prices now
  show (s)      print the full snapshot as JSON
  sectors       print sector summaries as JSON
  status        print loading flag and last update time
  help (h)      this text
  quit (q)      stop the session";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_aliases_case_insensitively() {
        assert_eq!("R".parse(), Ok(ConsoleCommand::Refresh));
        assert_eq!(" refresh ".parse(), Ok(ConsoleCommand::Refresh));
        assert_eq!("show".parse(), Ok(ConsoleCommand::Show));
        assert_eq!("EXIT".parse(), Ok(ConsoleCommand::Quit));
        assert_eq!("?".parse(), Ok(ConsoleCommand::Help));
    }

    #[test]
    fn test_unknown_command() {
        let err = "buy".parse::<ConsoleCommand>().unwrap_err();
        assert_eq!(err, UnknownCommand("buy".to_string()));
    }
}
