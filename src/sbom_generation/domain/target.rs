use super::CommandInvocation;

/// Label of the source-directory target
pub const APP_TARGET: &str = "app";
/// Label of the final image target
pub const FINAL_IMAGE_TARGET: &str = "image-final";
/// Label of the build-stage image target
pub const BUILD_IMAGE_TARGET: &str = "image-build";

/// ScanTarget value object: a named subject plus the scanner arguments naming it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    label: String,
    args: Vec<String>,
}

impl ScanTarget {
    pub fn new(label: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            label: label.into(),
            args,
        }
    }

    /// Source directory target (`dir:<path>`)
    pub fn directory(label: impl Into<String>, path: &str) -> Self {
        Self::new(label, vec![format!("dir:{}", path)])
    }

    /// Image reference target
    pub fn image(label: impl Into<String>, reference: &str) -> Self {
        Self::new(label, vec![reference.to_string()])
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// BuildStep value object: one image build command with a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    description: String,
    command: CommandInvocation,
}

impl BuildStep {
    pub fn new(description: impl Into<String>, command: CommandInvocation) -> Self {
        Self {
            description: description.into(),
            command,
        }
    }

    /// `<tool> build -t <tag> <context>`, optionally with `--target <stage>`
    pub fn image_build(tool: &str, stage: Option<&str>, tag: &str, context: &str) -> Self {
        let mut args = vec!["build".to_string()];
        if let Some(stage) = stage {
            args.push("--target".to_string());
            args.push(stage.to_string());
        }
        args.extend(["-t".to_string(), tag.to_string(), context.to_string()]);

        Self::new(
            format!("Building image: {}", tag),
            CommandInvocation::new(tool, args),
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn command(&self) -> &CommandInvocation {
        &self.command
    }
}
