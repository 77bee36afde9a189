use crate::shared::Result;
use std::path::{Path, PathBuf};

/// OutputWriter port for persisting the formatted SBOM
///
/// This port abstracts the output destination where the merged document
/// is written once at the end of a run.
pub trait OutputWriter {
    /// Writes content to the given path, replacing any existing file
    ///
    /// # Arguments
    /// * `path` - Destination file; missing parent directories are created
    /// * `content` - The formatted SBOM content
    ///
    /// # Returns
    /// The resolved (absolute) path that was written
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The destination is a symbolic link or a directory
    /// - Writing the file fails
    fn write_output(&self, path: &Path, content: &str) -> Result<PathBuf>;
}
