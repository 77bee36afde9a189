use crate::ports::outbound::{CommandRunner, OutputPolicy};
use crate::sbom_generation::domain::BuildStep;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// ImageBuilder runs image build steps with their output streamed live
///
/// A step that exits non-zero fails with `SbomError::BuildFailed`, carrying
/// the child's exit code so the whole run can terminate with it.
pub struct ImageBuilder<'a, CR> {
    runner: &'a CR,
}

impl<'a, CR: CommandRunner> ImageBuilder<'a, CR> {
    pub fn new(runner: &'a CR) -> Self {
        Self { runner }
    }

    pub fn build(&self, step: &BuildStep) -> Result<()> {
        let output = self.runner.run(step.command(), OutputPolicy::Stream)?;

        if !output.is_success() {
            return Err(SbomError::BuildFailed {
                command: step.command().to_string(),
                code: output.code,
            }
            .into());
        }
        Ok(())
    }
}
