/// Mock implementations for testing
mod mock_component_analyzer;
mod mock_progress_reporter;
mod mock_repository_source;

pub use mock_component_analyzer::MockComponentAnalyzer;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_source::MockRepositorySource;
