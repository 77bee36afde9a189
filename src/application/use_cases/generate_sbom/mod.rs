use crate::application::dto::{SbomRequest, SbomResponse};
use crate::application::services::{ImageBuilder, ScanInvoker};
use crate::ports::outbound::{CommandRunner, OutputWriter, ProgressReporter, SbomFormatter};
use crate::sbom_generation::domain::ScanDocument;
use crate::sbom_generation::services::{DocumentMerger, MergedSbom};
use crate::shared::Result;
use anyhow::Context;
use std::fmt;
use std::path::PathBuf;

const UPLOAD_TIP: &str =
    "🧠 Tip: You can upload this SBOM to security scanners like Grype or Dependency-Track.";

/// Stages of a run, in execution order
///
/// A failing stage aborts the run; later stages never start and no output
/// is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    BuildImages,
    ScanTargets,
    Merge,
    WriteOutput,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::BuildImages => write!(f, "build images"),
            PipelineStage::ScanTargets => write!(f, "scan targets"),
            PipelineStage::Merge => write!(f, "merge"),
            PipelineStage::WriteOutput => write!(f, "write output"),
        }
    }
}

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the build → scan → merge → write workflow
/// using generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `CR` - CommandRunner implementation
/// * `F` - SbomFormatter implementation
/// * `OW` - OutputWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<CR, F, OW, PR> {
    command_runner: CR,
    formatter: F,
    output_writer: OW,
    progress_reporter: PR,
}

impl<CR, F, OW, PR> GenerateSbomUseCase<CR, F, OW, PR>
where
    CR: CommandRunner,
    F: SbomFormatter,
    OW: OutputWriter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(command_runner: CR, formatter: F, output_writer: OW, progress_reporter: PR) -> Self {
        Self {
            command_runner,
            formatter,
            output_writer,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - Resolved run configuration
    ///
    /// # Returns
    /// SbomResponse with the written path and component counts
    pub fn execute(&self, request: &SbomRequest) -> Result<SbomResponse> {
        // Step 1: Build images
        self.run_stage(PipelineStage::BuildImages, || self.build_images(request))?;

        // Step 2: Scan every target
        let documents = self.run_stage(PipelineStage::ScanTargets, || self.scan_targets(request))?;
        let documents_merged = documents.len();

        // Step 3: Merge
        let merged = self.run_stage(PipelineStage::Merge, || Ok(self.merge(request, documents)))?;

        // Step 4: Write output
        let output_path =
            self.run_stage(PipelineStage::WriteOutput, || self.write_output(request, &merged))?;

        self.report_summary(&output_path, &merged);

        Ok(SbomResponse::new(
            output_path,
            merged.component_count(),
            merged.duplicates_dropped(),
            documents_merged,
        ))
    }

    /// Runs one stage, tagging a failure with the stage it aborted
    fn run_stage<T>(&self, stage: PipelineStage, step: impl FnOnce() -> Result<T>) -> Result<T> {
        step().map_err(|e| {
            self.progress_reporter
                .report_error(&format!("⛔ Aborted during stage: {}", stage));
            e.context(format!("SBOM generation aborted during stage '{}'", stage))
        })
    }

    fn build_images(&self, request: &SbomRequest) -> Result<()> {
        let builder = ImageBuilder::new(&self.command_runner);
        for step in &request.build_steps {
            self.progress_reporter
                .report(&format!("\n🚀 {}", step.description()));
            builder.build(step)?;
        }
        Ok(())
    }

    fn scan_targets(&self, request: &SbomRequest) -> Result<Vec<ScanDocument>> {
        if request.targets.is_empty() {
            self.progress_reporter
                .report("⚠️  No scan targets configured; the SBOM will contain no components.");
            return Ok(Vec::new());
        }

        let invoker = ScanInvoker::new(
            &self.command_runner,
            &request.scanner,
            &request.scanner_format,
        );
        let total = request.targets.len();
        let mut documents = Vec::with_capacity(total);

        for (idx, target) in request.targets.iter().enumerate() {
            self.progress_reporter
                .report(&format!("\n🔍 Scanning {} ...", target.label()));
            self.progress_reporter
                .report(&format!("🧩 Running: {}", invoker.command_for(target)));

            let document = invoker.scan(target)?;
            self.progress_reporter.report(&format!(
                "   Found {} component(s) in {}",
                document.component_count(),
                target.label()
            ));
            documents.push(document);

            self.progress_reporter
                .report_progress(idx + 1, total, Some(target.label()));
        }

        Ok(documents)
    }

    fn merge(&self, request: &SbomRequest, documents: Vec<ScanDocument>) -> MergedSbom {
        self.progress_reporter.report("\n🔄 Merging results ...");
        DocumentMerger::new(request.anonymous_components).merge(documents)
    }

    fn write_output(&self, request: &SbomRequest, merged: &MergedSbom) -> Result<PathBuf> {
        let content = self.formatter.format(merged.document())?;
        self.output_writer
            .write_output(&request.output_path, &content)
            .with_context(|| {
                format!(
                    "Failed to write merged SBOM to {}",
                    request.output_path.display()
                )
            })
    }

    fn report_summary(&self, output_path: &std::path::Path, merged: &MergedSbom) {
        self.progress_reporter.report_completion(&format!(
            "✅ Combined SBOM written to: {}",
            output_path.display()
        ));
        self.progress_reporter.report(&format!(
            "📦 Total components: {}",
            merged.component_count()
        ));
        if merged.duplicates_dropped() > 0 {
            self.progress_reporter.report(&format!(
                "🧹 Duplicates dropped: {}",
                merged.duplicates_dropped()
            ));
        }
        self.progress_reporter.report(&format!("\n{}", UPLOAD_TIP));
    }
}
