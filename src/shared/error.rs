use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Failures of external commands propagate the child's own exit code;
/// everything else maps onto one of these fixed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The merged SBOM was written
    Success = 0,
    /// Any fatal error without a more specific child exit code
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Renders an optional child exit code for error messages.
fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Error running: {command} ({status})\n\n💡 Hint: Check the build output above for the failing step", status = describe_status(.code))]
    BuildFailed { command: String, code: Option<i32> },

    #[error("Failed to start command: {command}\nDetails: {details}\n\n💡 Hint: Please verify that the program is installed and available on PATH")]
    CommandLaunchFailed { command: String, details: String },

    #[error("Scanner failed for target '{target}': {command} ({status})\n{stderr}", status = describe_status(.code))]
    ScanFailed {
        target: String,
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to parse scanner output for target '{target}': {command}\nDetails: {details}\n\n💡 Hint: The scanner must print a CycloneDX JSON document on stdout")]
    ScanOutputParseError {
        target: String,
        command: String,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the output location")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl SbomError {
    /// Exit status the whole run terminates with when this error aborts it.
    ///
    /// Build and scan failures propagate the child's exit code. A child killed
    /// by a signal, and every other failure, yields [`ExitCode::Failure`].
    pub fn exit_code(&self) -> i32 {
        match self {
            SbomError::BuildFailed {
                code: Some(code), ..
            }
            | SbomError::ScanFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => ExitCode::Failure.as_i32(),
        }
    }
}

/// Finds the exit code for an error by walking its cause chain.
///
/// Errors that carry no [`SbomError`] anywhere in the chain map to
/// [`ExitCode::Failure`].
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<SbomError>())
        .map(SbomError::exit_code)
        .unwrap_or_else(|| ExitCode::Failure.as_i32())
}
