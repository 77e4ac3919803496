//! TinyOS CLI Simulator
//!
//! An interactive shell that simulates a minimal operating-system surface:
//! integer arithmetic, a fixed 100-cell memory array, directory creation,
//! basic file read/write, directory listing and a fork-join demonstration
//! of concurrent tasks.

pub mod config;
pub mod executor;
pub mod filesystem;
pub mod memory;
pub mod parser;
pub mod shell;
pub mod tasks;
pub mod tokenizer;

// Re-export core types for convenience
pub use crate::error::{Result, ShellError};
pub use config::{ParseMode, ShellConfig};
pub use executor::{Executor, Flow};
pub use memory::MemoryStore;
pub use parser::{Command, Statement};
pub use shell::{Shell, ShellState};
pub use tokenizer::CommandLine;

/// Core error handling types for the shell
pub mod error {
    use std::io;
    use thiserror::Error;

    /// Result type for shell operations
    pub type Result<T> = std::result::Result<T, ShellError>;

    /// Every condition a handler reports to the user.
    ///
    /// The `Display` text is the exact line printed by the shell.
    #[derive(Debug, Error)]
    pub enum ShellError {
        /// A required argument is missing
        #[error("Usage: {0}")]
        Usage(&'static str),

        #[error("mkdir: missing directory name")]
        MissingDirectoryName,

        /// Memory index outside the store
        #[error("Invalid memory index.")]
        InvalidIndex(i32),

        /// Non-numeric argument under strict parsing
        #[error("{command}: '{text}' is not a valid integer")]
        InvalidNumber { command: &'static str, text: String },

        #[error("Too many arguments (at most {max} allowed).")]
        TooManyArguments { max: usize, given: usize },

        #[error("Unknown command. Type 'help' for list.")]
        UnknownCommand(String),

        /// A file system call failed on the host
        #[error("{op}: {source}")]
        Host {
            op: &'static str,
            #[source]
            source: io::Error,
        },

        /// Writing to the shell's own output failed; never shown to the user
        #[error("output error: {0}")]
        Output(#[from] io::Error),
    }

    impl ShellError {
        /// Wrap a host I/O failure for the named command
        pub fn host(op: &'static str, source: io::Error) -> Self {
            ShellError::Host { op, source }
        }

        /// True for errors caused by the host rather than by user input
        pub fn is_host_error(&self) -> bool {
            matches!(self, ShellError::Host { .. })
        }
    }
}
