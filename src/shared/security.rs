use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest single file the collector puts into a prompt document (2 MiB)
pub const MAX_COLLECTED_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Largest `--text-file` accepted as pasted repository contents (20 MiB)
pub const MAX_TEXT_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Maximum length of a repository identifier
const MAX_SEGMENT_LENGTH: usize = 255;

/// Fails when `path` itself is a symbolic link
///
/// Uses `symlink_metadata()` so the link is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Cannot {} {}: {}", operation, path.display(), e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link; refusing to {} through it.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Fails when `file_size` is above `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large to analyze ({} bytes, limit {} bytes).",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates that a user-supplied identifier is a single path segment
///
/// Repository identifiers are joined onto the repository root, so they must
/// not be able to escape it.
///
/// # Errors
/// Returns an error if the identifier contains path separators, `..`,
/// NUL bytes, or exceeds the length limit
pub fn validate_path_segment(segment: &str, description: &str) -> Result<()> {
    if segment.len() > MAX_SEGMENT_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            description,
            segment.len(),
            MAX_SEGMENT_LENGTH
        );
    }

    if segment.contains('/') || segment.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            description
        );
    }

    if segment == ".." || segment == "." || segment.contains("..") {
        anyhow::bail!("Security: {} contains '..' which is not allowed", description);
    }

    if segment.contains('\0') {
        anyhow::bail!("Security: {} contains a NUL byte", description);
    }

    Ok(())
}
