//! Terminal host input — one command per line.

/// A user action typed into the terminal host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `date <YYYY-MM-DD>`
    SetDate(String),
    /// `time <HH:MM>`
    SetTime(String),
    /// `print`
    Print,
    /// `zones`
    Zones,
    /// `help` or `?`
    Help,
    /// `quit`, `exit`, or `q`
    Quit,
}

pub const HELP: &str = "\
commands:
  date <YYYY-MM-DD>   set the selected date
  time <HH:MM>        pin the selected time
  print               print the selected time report
  zones               show the current zone times
  help                show this help
  quit                unmount the widget and exit";

impl Command {
    /// Parse one input line. Blank lines yield `None`; anything unrecognized
    /// is treated as a request for help.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = rest.trim();
        let command = match verb.to_ascii_lowercase().as_str() {
            "date" => Self::SetDate(arg.to_owned()),
            "time" => Self::SetTime(arg.to_owned()),
            "print" | "p" => Self::Print,
            "zones" | "z" => Self::Zones,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Help,
        };
        Some(command)
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
