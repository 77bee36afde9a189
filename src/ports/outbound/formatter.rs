use crate::sbom_generation::domain::ScanDocument;
use crate::shared::Result;

/// SbomFormatter port for serializing the merged SBOM
pub trait SbomFormatter {
    /// Formats the merged document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &ScanDocument) -> Result<String>;
}
