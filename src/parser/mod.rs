//! Parser for shell commands
//!
//! Maps a tokenized command line onto a typed `Statement`, checking that the
//! arguments each command needs are present and reading integer arguments
//! according to the configured `ParseMode`.

use crate::config::ParseMode;
use crate::error::{Result, ShellError};
use crate::tokenizer::CommandLine;

/// Known command names, matched case-sensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Add,
    Store,
    Load,
    Parallel,
    Mkdir,
    Write,
    Read,
    List,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::Exit,
        Command::Help,
        Command::Add,
        Command::Store,
        Command::Load,
        Command::Parallel,
        Command::Mkdir,
        Command::Write,
        Command::Read,
        Command::List,
    ];

    /// Look up a command by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Help => "help",
            Command::Add => "add",
            Command::Store => "store",
            Command::Load => "load",
            Command::Parallel => "parallel",
            Command::Mkdir => "mkdir",
            Command::Write => "write",
            Command::Read => "read",
            Command::List => "list",
        }
    }

    /// Argument synopsis shown in usage messages
    pub fn usage(self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Help => "help",
            Command::Add => "add a b",
            Command::Store => "store idx value",
            Command::Load => "load idx",
            Command::Parallel => "parallel",
            Command::Mkdir => "mkdir dirname",
            Command::Write => "write filename text",
            Command::Read => "read filename",
            Command::List => "list [path]",
        }
    }
}

/// A fully validated command ready for execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Exit,
    Help,
    Add { left: i32, right: i32 },
    Store { index: i32, value: i32 },
    Load { index: i32 },
    Parallel,
    Mkdir { path: String },
    Write { path: String, text: String },
    Read { path: String },
    /// Directory listing, `.` when no path is given
    List { path: String },
}

/// Parse a command line into a statement
pub fn parse_statement(line: &CommandLine, mode: ParseMode) -> Result<Statement> {
    let command = Command::from_name(&line.name)
        .ok_or_else(|| ShellError::UnknownCommand(line.name.clone()))?;

    match command {
        Command::Exit => Ok(Statement::Exit),
        Command::Help => Ok(Statement::Help),
        Command::Parallel => Ok(Statement::Parallel),
        Command::Add => {
            let (left, right) = required_pair(line, command)?;
            Ok(Statement::Add {
                left: parse_int(left, mode, command)?,
                right: parse_int(right, mode, command)?,
            })
        }
        Command::Store => {
            let (index, value) = required_pair(line, command)?;
            Ok(Statement::Store {
                index: parse_int(index, mode, command)?,
                value: parse_int(value, mode, command)?,
            })
        }
        Command::Load => {
            let index = line.arg(0).ok_or(ShellError::Usage(command.usage()))?;
            Ok(Statement::Load {
                index: parse_int(index, mode, command)?,
            })
        }
        Command::Mkdir => {
            let path = line.arg(0).ok_or(ShellError::MissingDirectoryName)?;
            Ok(Statement::Mkdir {
                path: path.to_string(),
            })
        }
        Command::Write => {
            let (path, text) = required_pair(line, command)?;
            Ok(Statement::Write {
                path: path.to_string(),
                text: text.to_string(),
            })
        }
        Command::Read => {
            let path = line.arg(0).ok_or(ShellError::Usage(command.usage()))?;
            Ok(Statement::Read {
                path: path.to_string(),
            })
        }
        Command::List => Ok(Statement::List {
            path: line.arg(0).unwrap_or(".").to_string(),
        }),
    }
}

fn required_pair(line: &CommandLine, command: Command) -> Result<(&str, &str)> {
    match (line.arg(0), line.arg(1)) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(ShellError::Usage(command.usage())),
    }
}

/// Read an integer argument for `command`
pub fn parse_int(text: &str, mode: ParseMode, command: Command) -> Result<i32> {
    match mode {
        ParseMode::Permissive => Ok(atoi(text)),
        ParseMode::Strict => text.parse().map_err(|_| ShellError::InvalidNumber {
            command: command.name(),
            text: text.to_string(),
        }),
    }
}

/// C `atoi`: optional leading whitespace and sign, then the longest run of
/// decimal digits. No digits yields 0; overflow wraps.
pub fn atoi(text: &str) -> i32 {
    let rest = text.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(i32::from(digit - b'0'))
        });

    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}
