//! Execution engine for shell statements
//!
//! Runs one parsed `Statement` at a time against the memory store and writes
//! everything the user sees to the supplied output. Handler failures are
//! reported on the output and never end the session.

use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::filesystem;
use crate::memory::MemoryStore;
use crate::parser::Statement;
use crate::tasks;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, warn};

const HELP_TEXT: &str = "\
Available Commands:
 add a b              → Add two numbers
 store idx value      → Store value into memory
 load idx             → Load value from memory
 mkdir dirname        → Create a directory
 write filename text  → Write text to a file
 read filename        → Read contents of a file
 list [path]          → List files in directory
 parallel             → Run tasks in parallel
 help                 → Show this help message
 exit                 → Exit the simulator
";

/// What the dispatcher does after a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Statement executor owning the simulated memory
#[derive(Debug)]
pub struct Executor {
    memory: MemoryStore,
    task_count: usize,
    max_task_delay: Duration,
}

impl Executor {
    /// Create a new executor
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            memory: MemoryStore::new(),
            task_count: config.task_count,
            max_task_delay: config.max_task_delay,
        }
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// Execute a statement, reporting handler errors on `out`.
    ///
    /// Only failures to write `out` are returned.
    pub fn execute_statement<W: Write>(
        &mut self,
        statement: &Statement,
        out: &mut W,
    ) -> io::Result<Flow> {
        match self.run(statement, out) {
            Ok(flow) => Ok(flow),
            Err(err) => {
                report_error(err, out)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn run<W: Write>(&mut self, statement: &Statement, out: &mut W) -> Result<Flow> {
        match statement {
            Statement::Exit => return Ok(Flow::Exit),
            Statement::Help => self.execute_help(out)?,
            Statement::Add { left, right } => self.execute_add(*left, *right, out)?,
            Statement::Store { index, value } => self.execute_store(*index, *value, out)?,
            Statement::Load { index } => self.execute_load(*index, out)?,
            Statement::Parallel => self.execute_parallel(out)?,
            Statement::Mkdir { path } => self.execute_mkdir(path, out)?,
            Statement::Write { path, text } => self.execute_write(path, text, out)?,
            Statement::Read { path } => self.execute_read(path, out)?,
            Statement::List { path } => self.execute_list(path, out)?,
        }
        Ok(Flow::Continue)
    }

    fn execute_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        write!(out, "{}", HELP_TEXT)?;
        Ok(())
    }

    fn execute_add<W: Write>(&self, left: i32, right: i32, out: &mut W) -> Result<()> {
        writeln!(out, "Result = {}", left.wrapping_add(right))?;
        Ok(())
    }

    fn execute_store<W: Write>(&mut self, index: i32, value: i32, out: &mut W) -> Result<()> {
        self.memory.store(index, value)?;
        writeln!(out, "Stored {} at memory[{}]", value, index)?;
        Ok(())
    }

    fn execute_load<W: Write>(&self, index: i32, out: &mut W) -> Result<()> {
        let value = self.memory.load(index)?;
        writeln!(out, "memory[{}] = {}", index, value)?;
        Ok(())
    }

    fn execute_parallel<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Running {} parallel tasks...", self.task_count)?;
        let summary = tasks::run_parallel(self.task_count, self.max_task_delay, |report| {
            writeln!(out, "Thread {} running task...", report.id)
        })?;
        debug!(spawned = summary.spawned, reported = summary.reported, "parallel run joined");
        writeln!(out, "All parallel tasks finished.")?;
        Ok(())
    }

    fn execute_mkdir<W: Write>(&self, path: &str, out: &mut W) -> Result<()> {
        filesystem::make_directory(path)?;
        writeln!(out, "Directory '{}' created successfully.", path)?;
        Ok(())
    }

    fn execute_write<W: Write>(&self, path: &str, text: &str, out: &mut W) -> Result<()> {
        filesystem::write_file(path, text)?;
        writeln!(out, "Written to '{}'.", path)?;
        Ok(())
    }

    fn execute_read<W: Write>(&self, path: &str, out: &mut W) -> Result<()> {
        let lines = filesystem::read_file(path)?;
        writeln!(out, "Contents of {}:", path)?;
        for line in lines {
            writeln!(out, " {}", line)?;
        }
        Ok(())
    }

    fn execute_list<W: Write>(&self, path: &str, out: &mut W) -> Result<()> {
        let entries = filesystem::list_directory(path)?;
        writeln!(out, "Listing directory: {}", path)?;
        for entry in entries {
            writeln!(out, " - {}", entry)?;
        }
        Ok(())
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

/// Print a handler error as a single diagnostic line.
///
/// Output failures are handed back instead of printed.
pub fn report_error<W: Write>(err: ShellError, out: &mut W) -> io::Result<()> {
    match err {
        ShellError::Output(source) => return Err(source),
        ShellError::UnknownCommand(ref name) => debug!(command = %name, "unknown command"),
        ShellError::TooManyArguments { max, given } => {
            debug!(max, given, "argument limit exceeded")
        }
        ref err if err.is_host_error() => warn!(error = %err, "host operation failed"),
        _ => {}
    }
    writeln!(out, "{}", err)
}
