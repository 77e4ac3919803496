//! Shell configuration
//!
//! The binary always runs with the defaults; the knobs exist so the library
//! can be driven deterministically from tests.

use std::time::Duration;

pub const DEFAULT_PROMPT: &str = "TinyOS> ";
pub const DEFAULT_TASK_COUNT: usize = 4;
pub const DEFAULT_MAX_TASK_DELAY: Duration = Duration::from_millis(10);

/// How integer arguments are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// `atoi` semantics: leading digits only, no digits means 0
    #[default]
    Permissive,
    /// The whole token must be a valid `i32`
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub parse_mode: ParseMode,
    /// Number of tasks spawned by `parallel`
    pub task_count: usize,
    /// Upper bound of the random delay each task sleeps before reporting
    pub max_task_delay: Duration,
}

impl ShellConfig {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            parse_mode: ParseMode::default(),
            task_count: DEFAULT_TASK_COUNT,
            max_task_delay: DEFAULT_MAX_TASK_DELAY,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    pub fn with_task_count(mut self, task_count: usize) -> Self {
        self.task_count = task_count;
        self
    }

    pub fn with_max_task_delay(mut self, max_task_delay: Duration) -> Self {
        self.max_task_delay = max_task_delay;
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}
