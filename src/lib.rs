//! repo-catalog - Component catalog for code repositories
//!
//! This library collects a repository's files into one document, asks a
//! generative model (Google Gemini) to identify the components in it, and
//! renders the result as a searchable catalog, a dependency map and
//! per-component detail views. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Components, filtering and relationship analysis
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use repo_catalog::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let use_case = AnalyzeRepositoryUseCase::new(
//!     DirectoryCollector::new("repos"),
//!     GeminiAnalyzer::from_env(DEFAULT_API_BASE_URL)?,
//!     FileSessionStore::open(".repo-catalog")?,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AnalysisRequest::builder()
//!     .repository("shop")
//!     .file_limit(FileLimit::first(10).unwrap_or_default())
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! let model = BrowseCatalogUseCase::<InMemoryResultStore>::overview_of(&response.analysis);
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryCollector, FileSessionStore, FileSystemWriter, InMemoryResultStore,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{GeminiAnalyzer, DEFAULT_API_BASE_URL};
    pub use crate::application::dto::{
        AnalysisOutcome, AnalysisRequest, AnalysisResponse, AnalysisSource, OutputFormat,
        RequestState,
    };
    pub use crate::application::read_models::{
        CatalogReadModel, CatalogReadModelBuilder, ComponentDetailView,
    };
    pub use crate::application::use_cases::{AnalyzeRepositoryUseCase, BrowseCatalogUseCase};
    pub use crate::catalog::domain::{AnalysisResult, Component, FileLimit};
    pub use crate::catalog::policies::{ComponentCategory, InputPolicy};
    pub use crate::catalog::services::{ComponentFilter, RelationshipAnalyzer};
    pub use crate::ports::inbound::RepositoryAnalysisPort;
    pub use crate::ports::outbound::{
        AnalysisOptions, CatalogFormatter, CollectedDocument, ComponentAnalyzer,
        OutputPresenter, ProgressReporter, RepositorySource, ResultStore, SkippedEntry,
        StoredAnalysis,
    };
    pub use crate::shared::error::{AnalysisError, AnalysisErrorKind, CatalogError, ExitCode};
    pub use crate::shared::Result;
}
