//! Child process execution
//!
//! Runs a single git invocation with the calling process's standard streams
//! attached directly, so interactive prompts and streaming output behave
//! exactly as if git had been called by hand. The child's exit status is
//! preserved as-is; failing to start the child at all is a distinct
//! condition from a non-zero exit.

use crate::error::{Result, XgitError};
use std::process::{Command, Stdio};
use tracing::debug;

/// Exit code used when the child could not be started or was killed by a
/// signal before reporting a status
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Outcome of one child invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit status code; `None` when the child was terminated by a signal
    pub exit_code: Option<i32>,
    /// Whether the child exited with status zero
    pub success: bool,
}

impl ExecutionResult {
    /// The child's exit code, or the fallback when none was reported
    pub fn code(&self) -> i32 {
        self.exit_code.unwrap_or(FALLBACK_EXIT_CODE)
    }
}

/// Seam between resolution and execution; lets tests substitute a recorder
/// for the real git binary
pub trait CommandRunner {
    /// Run one invocation, blocking until it terminates
    fn run(&mut self, argv: &[String]) -> Result<ExecutionResult>;
}

/// Runs git as a child process with inherited standard streams
#[derive(Debug)]
pub struct GitExecutor {
    program: String,
}

impl GitExecutor {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a different underlying binary; test hook
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for GitExecutor {
    fn run(&mut self, argv: &[String]) -> Result<ExecutionResult> {
        let cmd_str = format!("{} {}", self.program, argv.join(" "));
        debug!("+ {}", cmd_str);

        let status = Command::new(&self.program)
            .args(argv)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| XgitError::launch(cmd_str.clone(), e))?;

        let result = ExecutionResult {
            exit_code: status.code(),
            success: status.success(),
        };
        debug!(
            "command finished: success={}, exit_code={:?}",
            result.success, result.exit_code
        );
        Ok(result)
    }
}
