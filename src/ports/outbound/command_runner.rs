use crate::sbom_generation::domain::CommandInvocation;
use crate::shared::Result;

/// How a command's output is handled while it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPolicy {
    /// stdout and stderr are merged and forwarded line by line as they arrive
    Stream,
    /// stdout and stderr are collected separately and returned
    Capture,
}

/// Outcome of a finished command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured stdout (empty under `OutputPolicy::Stream`)
    pub stdout: Vec<u8>,
    /// Captured stderr (empty under `OutputPolicy::Stream`)
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    pub fn failure(code: Option<i32>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// CommandRunner port for executing external programs
///
/// This port abstracts process execution so the build and scan stages can
/// be driven without a real container tool or scanner.
pub trait CommandRunner {
    /// Runs a command to completion, blocking until it exits
    ///
    /// # Arguments
    /// * `command` - Program and arguments to execute
    /// * `policy` - Whether output is streamed live or captured
    ///
    /// # Returns
    /// The exit code and any captured output. A non-zero exit is not an
    /// error at this level.
    ///
    /// # Errors
    /// Returns an error if the program cannot be started
    fn run(&self, command: &CommandInvocation, policy: OutputPolicy) -> Result<CommandOutput>;
}
