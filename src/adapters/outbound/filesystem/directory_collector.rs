use crate::catalog::domain::FileLimit;
use crate::ports::outbound::{CollectedDocument, RepositorySource, SkippedEntry};
use crate::shared::error::{AnalysisError, CatalogError};
use crate::shared::security::{validate_file_size, validate_path_segment, MAX_COLLECTED_FILE_SIZE};
use crate::shared::Result;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names that hold installed dependencies rather than source
const DEPENDENCY_CACHE_DIRS: [&str; 3] = ["node_modules", "bower_components", "__pycache__"];

/// DirectoryCollector adapter turning a repository directory into one document
///
/// Repositories are the immediate subdirectories of `root`. Hidden entries
/// and dependency-cache directories are pruned from the walk, so they are
/// neither read nor counted against the file limit. A repository directory
/// may itself be a symbolic link; links inside it are never followed.
pub struct DirectoryCollector {
    root: PathBuf,
}

impl DirectoryCollector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the repository root on first use
    fn ensure_root(&self) -> Result<()> {
        if self.root.exists() {
            if !self.root.is_dir() {
                return Err(CatalogError::InvalidRepositoryRoot {
                    path: self.root.clone(),
                    reason: "Path exists but is not a directory".to_string(),
                }
                .into());
            }
            return Ok(());
        }

        fs::create_dir_all(&self.root).map_err(|e| {
            CatalogError::InvalidRepositoryRoot {
                path: self.root.clone(),
                reason: format!("Failed to create directory: {}", e),
            }
            .into()
        })
    }

    fn is_excluded(name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        name.starts_with('.') || DEPENDENCY_CACHE_DIRS.contains(&name.as_ref())
    }

    fn keep_entry(entry: &DirEntry) -> bool {
        entry.depth() == 0 || !Self::is_excluded(entry.file_name())
    }

    /// Relative path with `/` separators regardless of platform
    fn relative_path(base: &Path, path: &Path) -> String {
        path.strip_prefix(base)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Walks `base` and returns the candidate files in walk order
    fn walk(base: &Path, skipped: &mut Vec<SkippedEntry>) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(base).into_iter().filter_entry(Self::keep_entry) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped.push(SkippedEntry {
                        path: e.path().unwrap_or(base).to_path_buf(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if entry.depth() > 0 && entry.path_is_symlink() {
                skipped.push(SkippedEntry {
                    path: entry.path().to_path_buf(),
                    reason: "symbolic links are not followed".to_string(),
                });
                continue;
            }

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        files
    }

    /// Reads one file as UTF-8 text within the size limit
    fn read_text(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read metadata: {}", e))?;
        validate_file_size(metadata.len(), path, MAX_COLLECTED_FILE_SIZE)?;

        let bytes = fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))?;
        String::from_utf8(bytes).map_err(|_| anyhow::anyhow!("File is not valid UTF-8 text"))
    }
}

impl RepositorySource for DirectoryCollector {
    fn list_repositories(&self) -> Result<Vec<String>> {
        self.ensure_root()?;

        let entries = fs::read_dir(&self.root).map_err(|e| CatalogError::InvalidRepositoryRoot {
            path: self.root.clone(),
            reason: format!("Failed to list directory: {}", e),
        })?;

        let mut repositories: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !name.starts_with('.'))
            .collect();

        repositories.sort();
        Ok(repositories)
    }

    fn collect(&self, repository: &str, limit: FileLimit) -> Result<CollectedDocument> {
        validate_path_segment(repository, "Repository identifier")
            .map_err(|e| AnalysisError::invalid_input(e.to_string()))?;
        self.ensure_root()?;

        let base = self.root.join(repository);
        if !base.is_dir() {
            return Err(AnalysisError::NotFound { path: base }.into());
        }

        let mut document = CollectedDocument::default();
        let mut candidates = Self::walk(&base, &mut document.skipped);
        limit.apply(&mut candidates);

        for path in candidates {
            let relative = Self::relative_path(&base, &path);
            match Self::read_text(&path) {
                Ok(content) => {
                    document.content.push_str(&format!("--- File: {} ---\n", relative));
                    document.content.push_str(&content);
                    document.content.push_str("\n\n");
                    document.files.push(relative);
                }
                Err(e) => document.skipped.push(SkippedEntry {
                    path: PathBuf::from(relative),
                    reason: e.to_string(),
                }),
            }
        }

        Ok(document)
    }
}
