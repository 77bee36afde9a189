use std::path::PathBuf;

/// SbomResponse - Summary of a completed SBOM run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomResponse {
    /// Absolute path of the written SBOM
    pub output_path: PathBuf,
    /// Number of components in the merged SBOM
    pub component_count: usize,
    /// Number of components dropped as duplicates
    pub duplicates_dropped: usize,
    /// Number of documents that were merged
    pub documents_merged: usize,
}

impl SbomResponse {
    pub fn new(
        output_path: PathBuf,
        component_count: usize,
        duplicates_dropped: usize,
        documents_merged: usize,
    ) -> Self {
        Self {
            output_path,
            component_count,
            duplicates_dropped,
            documents_merged,
        }
    }
}
