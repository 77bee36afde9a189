use crate::ports::outbound::OutputWriter;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_not_directory, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the merged SBOM to disk
///
/// This adapter implements the OutputWriter port. The parent directory is
/// created when absent and an existing file is overwritten.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Creates the parent directory chain when it does not exist yet
    fn ensure_parent_directory(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if parent != Path::new("") && !parent.exists() => {
                fs::create_dir_all(parent).map_err(|e| SbomError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ),
                })?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Security validation before writing:
    /// - Reject if output path exists and is a symlink
    /// - Reject if output path is an existing directory
    fn validate_output_security(path: &Path) -> Result<()> {
        validate_not_symlink(path, "write")?;
        validate_not_directory(path).map_err(|e| SbomError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for FileSystemWriter {
    fn write_output(&self, path: &Path, content: &str) -> Result<PathBuf> {
        Self::validate_output_security(path)?;
        Self::ensure_parent_directory(path)?;

        fs::write(path, content).map_err(|e| SbomError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        // Canonicalizing can only fail if the file vanished right after the write
        Ok(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sbom.json");

        let writer = FileSystemWriter::new();
        let resolved = writer.write_output(&output_path, "test content").unwrap();

        assert!(resolved.is_absolute());
        let written_content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written_content, "test content");
    }

    #[test]
    fn test_file_writer_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sbom").join("nested").join("sbom.json");

        let writer = FileSystemWriter::new();
        writer.write_output(&output_path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "{}");
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sbom.json");
        fs::write(&output_path, "old content that is longer").unwrap();

        FileSystemWriter::new()
            .write_output(&output_path, "new")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_rejects_directory_target() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemWriter::new().write_output(temp_dir.path(), "{}");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to write to file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("sbom.json");
        fs::write(&real, "untouched").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let result = FileSystemWriter::new().write_output(&link, "{}");

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&real).unwrap(), "untouched");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("sbom");
        fs::write(&blocker, "not a directory").unwrap();

        let result = FileSystemWriter::new().write_output(&blocker.join("sbom.json"), "{}");

        assert!(result.is_err());
    }
}
