use clap::Parser;
use std::path::PathBuf;

/// Build container images, scan them, and merge the results into one SBOM
///
/// Without arguments the full pipeline runs with the defaults, or with the
/// settings from `container-sbom.config.yml` in the current directory.
#[derive(Parser, Debug)]
#[command(name = "container-sbom")]
#[command(version)]
#[command(
    about = "Build container images, scan them with Syft, and merge the results into one CycloneDX SBOM",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./container-sbom.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
