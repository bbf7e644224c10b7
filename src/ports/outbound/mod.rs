/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, model backend, console, etc.).
pub mod component_analyzer;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_source;
pub mod result_store;

pub use component_analyzer::{AnalysisOptions, ComponentAnalyzer, DEFAULT_MODEL, KNOWN_MODELS};
pub use formatter::CatalogFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_source::{CollectedDocument, RepositorySource, SkippedEntry};
pub use result_store::{ResultStore, StoredAnalysis};
