use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes. Code 2 is produced by clap itself on a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the view was rendered (including the "no components" state)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (validation, model call, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Kind tag of an [`AnalysisError`], shown as the title of the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisErrorKind {
    InvalidInput,
    NotFound,
    EmptyInput,
    AnalysisFailed,
}

impl fmt::Display for AnalysisErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisErrorKind::InvalidInput => write!(f, "Invalid Input"),
            AnalysisErrorKind::NotFound => write!(f, "Not Found"),
            AnalysisErrorKind::EmptyInput => write!(f, "Empty Input"),
            AnalysisErrorKind::AnalysisFailed => write!(f, "Analysis Failed"),
        }
    }
}

/// Errors raised at the analysis request boundary.
///
/// Every variant carries a human-readable message. A successful analysis
/// that yields zero components is not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Repository not found: {}\n\n💡 Hint: Run `repo-catalog repos` to list the repositories under the configured root", path.display())]
    NotFound { path: PathBuf },

    #[error("{message}")]
    EmptyInput { message: String },

    #[error("{message}")]
    AnalysisFailed { message: String },
}

impl AnalysisError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AnalysisError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn empty_input(message: impl Into<String>) -> Self {
        AnalysisError::EmptyInput {
            message: message.into(),
        }
    }

    pub fn analysis_failed(message: impl Into<String>) -> Self {
        AnalysisError::AnalysisFailed {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> AnalysisErrorKind {
        match self {
            AnalysisError::InvalidInput { .. } => AnalysisErrorKind::InvalidInput,
            AnalysisError::NotFound { .. } => AnalysisErrorKind::NotFound,
            AnalysisError::EmptyInput { .. } => AnalysisErrorKind::EmptyInput,
            AnalysisError::AnalysisFailed { .. } => AnalysisErrorKind::AnalysisFailed,
        }
    }
}

/// Errors outside the analysis request: session store, output file and
/// repository root.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No analysis result is available in the session store: {path}\n\n💡 Hint: Run `repo-catalog analyze` first")]
    NoStoredResult { path: PathBuf },

    #[error("Failed to access the session store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the session directory is writable")]
    SessionStoreError { path: PathBuf, details: String },

    #[error("Failed to write the catalog to {path}\nDetails: {details}\n\n💡 Hint: Check that the directory exists and is writable")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid repository root: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory with --repo-root or `repo_root` in the config file")]
    InvalidRepositoryRoot { path: PathBuf, reason: String },
}
