//! Configuration file support for container-sbom.
//!
//! Provides YAML-based configuration through `container-sbom.config.yml`
//! files, including data structures, file loading, validation, and the
//! conversion into an [`SbomRequest`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::SbomRequest;
use crate::sbom_generation::domain::ScanTarget;
use crate::sbom_generation::policies::AnonymousComponentPolicy;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "container-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub build_tool: Option<String>,
    pub context: Option<String>,
    pub final_image: Option<String>,
    pub build_image: Option<String>,
    pub build_stage: Option<String>,
    pub skip_build: Option<bool>,
    pub scanner: Option<String>,
    pub scanner_format: Option<String>,
    pub output: Option<String>,
    pub anonymous_components: Option<String>,
    pub targets: Option<Vec<TargetConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// An explicitly configured scan target.
#[derive(Debug, Deserialize)]
pub struct TargetConfig {
    pub label: String,
    pub args: Vec<String>,
}

impl ConfigFile {
    /// Resolves the configuration into an immutable request, filling unset
    /// fields with the defaults.
    pub fn to_request(&self) -> Result<SbomRequest> {
        let mut builder = SbomRequest::builder();

        if let Some(tool) = &self.build_tool {
            builder = builder.build_tool(tool);
        }
        if let Some(context) = &self.context {
            builder = builder.context(context);
        }
        if let Some(tag) = &self.final_image {
            builder = builder.final_image(tag);
        }
        if let Some(tag) = &self.build_image {
            builder = builder.build_image(tag);
        }
        if let Some(stage) = &self.build_stage {
            builder = builder.build_stage(stage);
        }
        if let Some(skip) = self.skip_build {
            builder = builder.skip_build(skip);
        }
        if let Some(scanner) = &self.scanner {
            builder = builder.scanner(scanner);
        }
        if let Some(format) = &self.scanner_format {
            builder = builder.scanner_format(format);
        }
        if let Some(output) = &self.output {
            builder = builder.output_path(output);
        }
        if let Some(policy) = &self.anonymous_components {
            let policy = AnonymousComponentPolicy::from_str(policy).map_err(|e| {
                anyhow::anyhow!("Invalid config: anonymous_components: {}", e)
            })?;
            builder = builder.anonymous_components(policy);
        }
        if let Some(targets) = &self.targets {
            builder = builder.targets(
                targets
                    .iter()
                    .map(|t| ScanTarget::new(&t.label, t.args.clone()))
                    .collect(),
            );
        }

        builder.build().context(
            "Invalid configuration\n\n💡 Hint: Check the values in your container-sbom.config.yml",
        )
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref targets) = config.targets {
        for (i, target) in targets.iter().enumerate() {
            if target.label.trim().is_empty() {
                bail!(
                    "Invalid config: targets[{}].label must not be empty.\n\n\
                     💡 Hint: Each target needs a label (e.g., \"app\") and scanner args (e.g., [\"dir:.\"]).",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
