/// Use cases module containing application business logic orchestration
mod analyze_repository;
mod browse_catalog;

pub use analyze_repository::AnalyzeRepositoryUseCase;
pub use browse_catalog::BrowseCatalogUseCase;
