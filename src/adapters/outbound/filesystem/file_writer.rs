use crate::ports::outbound::OutputPresenter;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes a rendered catalog view to `--output`
///
/// The view is written next to the target and renamed into place, so an
/// interrupted write never leaves a truncated catalog behind.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn fail(&self, details: impl Into<String>) -> anyhow::Error {
        CatalogError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn check_target(&self) -> Result<()> {
        let parent = self.output_path.parent().filter(|p| *p != Path::new(""));
        if let Some(parent) = parent {
            if !parent.is_dir() {
                return Err(self.fail(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        match fs::symlink_metadata(&self.output_path) {
            Ok(meta) if meta.is_symlink() => Err(self.fail(
                "Security: Output path is a symbolic link. Writing through symbolic links is not allowed.",
            )),
            Ok(meta) if meta.is_dir() => Err(self.fail("Output path is a directory")),
            _ => Ok(()),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .output_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".partial");
        self.output_path.with_file_name(name)
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_target()?;

        let staging = self.staging_path();
        fs::write(&staging, content).map_err(|e| self.fail(e.to_string()))?;
        if let Err(e) = fs::rename(&staging, &self.output_path) {
            let _ = fs::remove_file(&staging);
            return Err(self.fail(e.to_string()));
        }

        eprintln!("✅ Catalog written to: {}", self.output_path.display());
        Ok(())
    }
}

/// Writes a rendered catalog view to stdout
#[derive(Default)]
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write the catalog to stdout: {}", e))
    }
}
