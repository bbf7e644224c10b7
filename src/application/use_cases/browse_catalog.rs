use crate::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
use crate::catalog::services::ComponentFilter;
use crate::ports::outbound::{ResultStore, StoredAnalysis};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::path::PathBuf;

/// BrowseCatalogUseCase - Read-side use case over the stored analysis
///
/// Backs the catalog, dependency map and component detail views. Every view
/// reads the last saved result; nothing here calls the model.
///
/// # Type Parameters
/// * `ST` - ResultStore implementation
pub struct BrowseCatalogUseCase<ST> {
    result_store: ST,
}

impl<ST: ResultStore> BrowseCatalogUseCase<ST> {
    pub fn new(result_store: ST) -> Self {
        Self { result_store }
    }

    /// Loads the stored analysis
    ///
    /// # Errors
    /// Returns `CatalogError::NoStoredResult` when nothing was saved in the
    /// current session
    pub fn load(&self) -> Result<StoredAnalysis> {
        self.result_store.load()?.ok_or_else(|| {
            CatalogError::NoStoredResult {
                path: PathBuf::from(self.result_store.location()),
            }
            .into()
        })
    }

    /// The view shown right after an analysis: unfiltered catalog plus map
    pub fn overview(&self) -> Result<CatalogReadModel> {
        let analysis = self.load()?;
        Ok(Self::overview_of(&analysis))
    }

    /// Builds the overview for an analysis that is already in hand
    pub fn overview_of(analysis: &StoredAnalysis) -> CatalogReadModel {
        CatalogReadModelBuilder::new(analysis)
            .with_catalog(&ComponentFilter::match_all())
            .with_dependency_map()
            .build()
    }

    pub fn catalog(&self, filter: &ComponentFilter) -> Result<CatalogReadModel> {
        let analysis = self.load()?;
        Ok(CatalogReadModelBuilder::new(&analysis)
            .with_catalog(filter)
            .build())
    }

    pub fn dependency_map(&self) -> Result<CatalogReadModel> {
        let analysis = self.load()?;
        Ok(CatalogReadModelBuilder::new(&analysis)
            .with_dependency_map()
            .build())
    }

    /// Detail view for one component
    ///
    /// An unknown name yields the not-found detail state, not an error.
    pub fn component_detail(&self, name: &str) -> Result<CatalogReadModel> {
        let analysis = self.load()?;
        Ok(CatalogReadModelBuilder::new(&analysis)
            .with_detail(name)
            .build())
    }

    /// Ends the session by removing the stored result
    pub fn clear(&self) -> Result<()> {
        self.result_store.clear()
    }

    pub fn location(&self) -> String {
        self.result_store.location()
    }
}
