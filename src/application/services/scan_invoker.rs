use crate::ports::outbound::{CommandRunner, OutputPolicy};
use crate::sbom_generation::domain::{CommandInvocation, ScanDocument, ScanTarget};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// ScanInvoker runs the inventory scanner against one target
///
/// The scanner is invoked as `<scanner> <target-args...> -o <format>` with
/// stdout and stderr captured separately. A zero exit parses stdout as a
/// scan document; anything else fails with the captured stderr attached.
pub struct ScanInvoker<'a, CR> {
    runner: &'a CR,
    scanner: &'a str,
    format: &'a str,
}

impl<'a, CR: CommandRunner> ScanInvoker<'a, CR> {
    pub fn new(runner: &'a CR, scanner: &'a str, format: &'a str) -> Self {
        Self {
            runner,
            scanner,
            format,
        }
    }

    /// Command line used to scan a target
    pub fn command_for(&self, target: &ScanTarget) -> CommandInvocation {
        CommandInvocation::new(self.scanner, target.args().to_vec()).with_args(["-o", self.format])
    }

    pub fn scan(&self, target: &ScanTarget) -> Result<ScanDocument> {
        let command = self.command_for(target);
        let output = self.runner.run(&command, OutputPolicy::Capture)?;

        if !output.is_success() {
            return Err(SbomError::ScanFailed {
                target: target.label().to_string(),
                command: command.to_string(),
                code: output.code,
                stderr: output.stderr_lossy(),
            }
            .into());
        }

        serde_json::from_slice(&output.stdout).map_err(|e| {
            SbomError::ScanOutputParseError {
                target: target.label().to_string(),
                command: command.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
