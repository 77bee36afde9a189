use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::ScanDocument;
use crate::shared::Result;
use anyhow::Context;

/// CycloneDxFormatter adapter for writing the merged SBOM as CycloneDX JSON
///
/// The document is serialized as-is with two-space indentation. Metadata
/// copied from the base scan keeps its original field order.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, document: &ScanDocument) -> Result<String> {
        serde_json::to_string_pretty(document).context("Failed to serialize merged SBOM to JSON")
    }
}
