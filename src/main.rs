mod cli;

use cli::Args;
use container_sbom::adapters::outbound::console::StderrProgressReporter;
use container_sbom::adapters::outbound::filesystem::FileSystemWriter;
use container_sbom::adapters::outbound::formatters::CycloneDxFormatter;
use container_sbom::adapters::outbound::process::SystemCommandRunner;
use container_sbom::application::dto::SbomRequest;
use container_sbom::application::use_cases::GenerateSbomUseCase;
use container_sbom::config;
use container_sbom::shared::error::exit_code_for;
use container_sbom::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    // Parse command-line arguments (clap exits with 2 on invalid input)
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e));
    }
}

fn run(args: Args) -> Result<()> {
    let request = resolve_request(&args)?;

    // Create adapters (Dependency Injection)
    let use_case = GenerateSbomUseCase::new(
        SystemCommandRunner::new(),
        CycloneDxFormatter::new(),
        FileSystemWriter::new(),
        StderrProgressReporter::new(),
    );

    use_case.execute(&request)?;
    Ok(())
}

/// Builds the run configuration from an explicit or auto-discovered config file
fn resolve_request(args: &Args) -> Result<SbomRequest> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };

    config.unwrap_or_default().to_request()
}
