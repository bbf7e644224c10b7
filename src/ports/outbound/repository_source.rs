use crate::catalog::domain::FileLimit;
use crate::shared::Result;
use std::path::PathBuf;

/// A file or directory the collector could not read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// The single text document produced from a repository
#[derive(Debug, Clone, Default)]
pub struct CollectedDocument {
    /// Concatenated `--- File: <path> ---` blocks
    pub content: String,
    /// Relative paths of the files included, in walk order
    pub files: Vec<String>,
    /// Entries that were skipped because they could not be read
    pub skipped: Vec<SkippedEntry>,
}

impl CollectedDocument {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// RepositorySource port for turning a repository into prompt input
///
/// This port abstracts the file system operations needed to list the
/// repositories under the configured root and to collect one repository's
/// text into a single document.
pub trait RepositorySource {
    /// Lists the selectable repositories (immediate subdirectories of the root)
    ///
    /// # Errors
    /// Returns an error if the root cannot be created or listed
    fn list_repositories(&self) -> Result<Vec<String>>;

    /// Collects the text of one repository into a single document
    ///
    /// # Arguments
    /// * `repository` - Repository identifier (a directory name under the root)
    /// * `limit` - How many files to include, in walk order
    ///
    /// # Errors
    /// Returns an error wrapping `AnalysisError::NotFound` if the repository
    /// directory does not exist. Unreadable files and directories are not
    /// errors; they are listed in [`CollectedDocument::skipped`].
    fn collect(&self, repository: &str, limit: FileLimit) -> Result<CollectedDocument>;
}
