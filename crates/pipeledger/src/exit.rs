use std::fmt;

use pipeledger_task::TaskError;

// One generic failure code: bad arguments, pipe creation and spawn
// failures all exit 1. Mid-protocol I/O problems are diagnostics, not
// exit-code changes.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(FAILURE, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn task_error(context: &str, err: TaskError) -> CliError {
    CliError::new(FAILURE, format!("{context}: {err}"))
}
