//! Tokenizer for shell input lines
//!
//! Splits a raw line into a command name and its ordered arguments. There is
//! no quoting or escaping: any whitespace run separates tokens.

use crate::error::{Result, ShellError};

/// Most argument tokens a single line may carry
pub const MAX_ARGS: usize = 9;

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Create a new command line
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Argument at `position`, if present
    pub fn arg(&self, position: usize) -> Option<&str> {
        self.args.get(position).map(String::as_str)
    }
}

/// Strip the line terminator from a raw input line
pub fn strip_terminator(raw: &str) -> &str {
    raw.trim_end_matches(['\n', '\r'])
}

/// Tokenize one input line.
///
/// Returns `Ok(None)` for a line with no tokens.
pub fn tokenize(raw: &str) -> Result<Option<CommandLine>> {
    let mut tokens = strip_terminator(raw).split_whitespace();

    let Some(name) = tokens.next() else {
        return Ok(None);
    };

    let args: Vec<String> = tokens.map(str::to_string).collect();
    if args.len() > MAX_ARGS {
        return Err(ShellError::TooManyArguments {
            max: MAX_ARGS,
            given: args.len(),
        });
    }

    Ok(Some(CommandLine::new(name, args)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_with_args() {
        let line = tokenize("store 3 42\n").unwrap().unwrap();
        assert_eq!(line.name, "store");
        assert_eq!(line.args, vec!["3", "42"]);
        assert_eq!(line.arg(1), Some("42"));
        assert_eq!(line.arg(2), None);
    }

    #[test]
    fn test_blank_lines_have_no_tokens() {
        assert_eq!(tokenize("").unwrap(), None);
        assert_eq!(tokenize("\n").unwrap(), None);
        assert_eq!(tokenize("   \t  \r\n").unwrap(), None);
    }

    #[test]
    fn test_whitespace_runs_split_once() {
        let line = tokenize("  add\t 3    4  \r\n").unwrap().unwrap();
        assert_eq!(line, CommandLine::new("add", vec!["3".into(), "4".into()]));
    }

    #[test]
    fn test_no_quoting() {
        let line = tokenize("write notes.txt \"hello world\"").unwrap().unwrap();
        assert_eq!(line.args, vec!["notes.txt", "\"hello", "world\""]);
    }

    #[test]
    fn test_argument_limit() {
        let nine = tokenize("list 1 2 3 4 5 6 7 8 9").unwrap().unwrap();
        assert_eq!(nine.args.len(), MAX_ARGS);

        let err = tokenize("list 1 2 3 4 5 6 7 8 9 10").unwrap_err();
        assert!(matches!(err, ShellError::TooManyArguments { max: 9, given: 10 }));
        assert_eq!(err.to_string(), "Too many arguments (at most 9 allowed).");
    }

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("help\r\n"), "help");
        assert_eq!(strip_terminator("help"), "help");
        assert_eq!(strip_terminator("help \n"), "help ");
    }
}
