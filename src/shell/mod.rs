//! Interactive command loop
//!
//! Reads one line at a time, tokenizes and parses it, and hands the result to
//! the executor. The loop is `Running` until `exit` or end of input moves it
//! to `Terminated`, which is final.

use crate::config::ShellConfig;
use crate::executor::{report_error, Executor, Flow};
use crate::parser::parse_statement;
use crate::tokenizer::tokenize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

pub const BANNER: &str = "=== TinyOS CLI Simulator ===";
pub const GREETING: &str = "Type 'help' for available commands.";
pub const FAREWELL: &str = "TinyOS terminated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

/// The command dispatcher
#[derive(Debug)]
pub struct Shell {
    config: ShellConfig,
    executor: Executor,
    state: ShellState,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let executor = Executor::new(&config);
        Self {
            config,
            executor,
            state: ShellState::Running,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Run the session until `exit` or end of input.
    ///
    /// Returns an error only when writing to `out` fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        info!("shell started");
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", GREETING)?;

        // Raw bytes so a line that is not UTF-8 is still dispatched
        let mut line = Vec::new();
        while self.state == ShellState::Running {
            write!(out, "\n{}", self.config.prompt)?;
            out.flush()?;

            line.clear();
            match input.read_until(b'\n', &mut line) {
                Ok(0) => {
                    debug!("end of input");
                    writeln!(out)?;
                    self.state = ShellState::Terminated;
                }
                Ok(_) => {
                    self.process_line(&String::from_utf8_lossy(&line), &mut out)?;
                }
                Err(e) => {
                    warn!(error = %e, "failed to read input");
                    writeln!(out)?;
                    self.state = ShellState::Terminated;
                }
            }
        }

        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;
        info!("shell terminated");
        Ok(())
    }

    /// Dispatch one raw input line.
    ///
    /// Lines are ignored once the shell has terminated.
    pub fn process_line<W: Write>(&mut self, raw: &str, out: &mut W) -> io::Result<ShellState> {
        if self.state == ShellState::Terminated {
            return Ok(self.state);
        }

        let command_line = match tokenize(raw) {
            Ok(Some(command_line)) => command_line,
            Ok(None) => return Ok(self.state),
            Err(err) => {
                report_error(err, out)?;
                return Ok(self.state);
            }
        };

        debug!(command = %command_line.name, args = command_line.args.len(), "dispatching");
        let statement = match parse_statement(&command_line, self.config.parse_mode) {
            Ok(statement) => statement,
            Err(err) => {
                report_error(err, out)?;
                return Ok(self.state);
            }
        };

        if self.executor.execute_statement(&statement, out)? == Flow::Exit {
            self.state = ShellState::Terminated;
        }
        Ok(self.state)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
