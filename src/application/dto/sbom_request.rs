use crate::sbom_generation::domain::{
    BuildStep, ScanTarget, APP_TARGET, BUILD_IMAGE_TARGET, FINAL_IMAGE_TARGET,
};
use crate::sbom_generation::policies::AnonymousComponentPolicy;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::PathBuf;

pub const DEFAULT_BUILD_TOOL: &str = "docker";
pub const DEFAULT_CONTEXT: &str = ".";
pub const DEFAULT_FINAL_IMAGE: &str = "vault-radar-csv:latest";
pub const DEFAULT_BUILD_IMAGE: &str = "vault-radar-csv-build:latest";
pub const DEFAULT_BUILD_STAGE: &str = "build";
pub const DEFAULT_SCANNER: &str = "syft";
pub const DEFAULT_SCANNER_FORMAT: &str = "cyclonedx-json";
pub const DEFAULT_OUTPUT_PATH: &str = "sbom/sbom.json";

/// SbomRequest - Immutable run configuration for the SBOM pipeline
///
/// Resolved once at start-up from defaults and the optional config file,
/// then passed by reference into the use case.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Image builds to run, in order
    pub build_steps: Vec<BuildStep>,
    /// Scan targets, in order; the first one provides the base metadata
    pub targets: Vec<ScanTarget>,
    /// Scanner program
    pub scanner: String,
    /// Value passed to the scanner's `-o` flag
    pub scanner_format: String,
    /// Where the merged SBOM is written
    pub output_path: PathBuf,
    /// How components without purl and name are deduplicated
    pub anonymous_components: AnonymousComponentPolicy,
}

impl SbomRequest {
    /// Creates a new builder initialized with the defaults
    pub fn builder() -> SbomRequestBuilder {
        SbomRequestBuilder::new()
    }
}

/// Builder for SbomRequest
///
/// Targets default to the source directory followed by the final and the
/// build-stage image; `targets` replaces that list entirely.
#[derive(Debug, Clone)]
pub struct SbomRequestBuilder {
    build_tool: String,
    context: String,
    final_image: String,
    build_image: String,
    build_stage: String,
    skip_build: bool,
    scanner: String,
    scanner_format: String,
    output_path: PathBuf,
    targets: Option<Vec<ScanTarget>>,
    anonymous_components: AnonymousComponentPolicy,
}

impl SbomRequestBuilder {
    pub fn new() -> Self {
        Self {
            build_tool: DEFAULT_BUILD_TOOL.to_string(),
            context: DEFAULT_CONTEXT.to_string(),
            final_image: DEFAULT_FINAL_IMAGE.to_string(),
            build_image: DEFAULT_BUILD_IMAGE.to_string(),
            build_stage: DEFAULT_BUILD_STAGE.to_string(),
            skip_build: false,
            scanner: DEFAULT_SCANNER.to_string(),
            scanner_format: DEFAULT_SCANNER_FORMAT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            targets: None,
            anonymous_components: AnonymousComponentPolicy::default(),
        }
    }

    pub fn build_tool(mut self, tool: impl Into<String>) -> Self {
        self.build_tool = tool.into();
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn final_image(mut self, tag: impl Into<String>) -> Self {
        self.final_image = tag.into();
        self
    }

    pub fn build_image(mut self, tag: impl Into<String>) -> Self {
        self.build_image = tag.into();
        self
    }

    pub fn build_stage(mut self, stage: impl Into<String>) -> Self {
        self.build_stage = stage.into();
        self
    }

    pub fn skip_build(mut self, skip: bool) -> Self {
        self.skip_build = skip;
        self
    }

    pub fn scanner(mut self, scanner: impl Into<String>) -> Self {
        self.scanner = scanner.into();
        self
    }

    pub fn scanner_format(mut self, format: impl Into<String>) -> Self {
        self.scanner_format = format.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn targets(mut self, targets: Vec<ScanTarget>) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn anonymous_components(mut self, policy: AnonymousComponentPolicy) -> Self {
        self.anonymous_components = policy;
        self
    }

    /// Validates the settings and builds the request
    ///
    /// # Errors
    /// Returns `SbomError::Validation` if a program name, image tag, target
    /// label or target argument list is empty, a target label repeats, or
    /// the output path is empty
    pub fn build(self) -> Result<SbomRequest> {
        self.validate()?;
        Ok(self.resolve())
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("scanner", &self.scanner),
            ("scanner_format", &self.scanner_format),
        ];
        let build_required = [
            ("build_tool", &self.build_tool),
            ("build_stage", &self.build_stage),
        ];
        // Builds and the default targets both take the context and image tags
        let image_required = [
            ("context", &self.context),
            ("final_image", &self.final_image),
            ("build_image", &self.build_image),
        ];
        let builds = !self.skip_build;
        let default_targets = self.targets.is_none();
        let checked = required
            .iter()
            .chain(build_required.iter().filter(|_| builds))
            .chain(image_required.iter().filter(|_| builds || default_targets));
        for (field, value) in checked {
            if value.trim().is_empty() {
                return Err(validation(format!("{} must not be empty", field)));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(validation("output path must not be empty".to_string()));
        }

        if let Some(targets) = &self.targets {
            let mut labels = HashSet::new();
            for (i, target) in targets.iter().enumerate() {
                if target.label().trim().is_empty() {
                    return Err(validation(format!("targets[{}].label must not be empty", i)));
                }
                if target.args().is_empty() {
                    return Err(validation(format!(
                        "targets[{}] ('{}') must have at least one argument",
                        i,
                        target.label()
                    )));
                }
                if !labels.insert(target.label()) {
                    return Err(validation(format!(
                        "target label '{}' is used more than once",
                        target.label()
                    )));
                }
            }
        }

        Ok(())
    }

    fn resolve(self) -> SbomRequest {
        let build_steps = if self.skip_build {
            Vec::new()
        } else {
            vec![
                BuildStep::image_build(&self.build_tool, None, &self.final_image, &self.context),
                BuildStep::image_build(
                    &self.build_tool,
                    Some(&self.build_stage),
                    &self.build_image,
                    &self.context,
                ),
            ]
        };

        let targets = self.targets.unwrap_or_else(|| {
            vec![
                ScanTarget::directory(APP_TARGET, &self.context),
                ScanTarget::image(FINAL_IMAGE_TARGET, &self.final_image),
                ScanTarget::image(BUILD_IMAGE_TARGET, &self.build_image),
            ]
        });

        SbomRequest {
            build_steps,
            targets,
            scanner: self.scanner,
            scanner_format: self.scanner_format,
            output_path: self.output_path,
            anonymous_components: self.anonymous_components,
        }
    }
}

impl Default for SbomRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validation(message: String) -> anyhow::Error {
    SbomError::Validation { message }.into()
}
