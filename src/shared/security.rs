use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that an existing path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to. A path that
/// does not exist yet passes, since it will be created as a regular entry.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Path is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
                operation
            ),
            hint: "Point the output setting at a regular file location".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that an existing path is not a directory
///
/// # Errors
/// Returns an error if the path exists and is a directory
pub fn validate_not_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        anyhow::bail!("{} is a directory, not a file", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sbom.json");
        fs::write(&file_path, "{}").unwrap();

        let result = validate_not_symlink(&file_path, "write");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent_is_allowed() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_not_symlink(&temp_dir.path().join("missing.json"), "write");
        assert!(result.is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_not_symlink(&link, "write");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Security violation"));
    }

    #[test]
    fn test_validate_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_not_directory(temp_dir.path()).is_err());
        assert!(validate_not_directory(&temp_dir.path().join("sbom.json")).is_ok());
    }
}
