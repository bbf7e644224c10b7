use crate::application::dto::{AnalysisRequest, AnalysisResponse, RequestState};
use crate::shared::error::AnalysisError;
use async_trait::async_trait;

/// RepositoryAnalysisPort - Inbound port for the analysis use case
///
/// This port defines the interface that driving adapters (the CLI) use to
/// submit an analysis. It is the crate's equivalent of the analysis form's
/// submit action.
#[async_trait(?Send)]
pub trait RepositoryAnalysisPort {
    /// Runs one analysis to completion
    ///
    /// # Returns
    /// A response carrying either the components or the "no components
    /// found" outcome
    ///
    /// # Errors
    /// Returns a tagged [`AnalysisError`]; the model is never invoked when
    /// input validation fails
    async fn analyze_repository(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalysisError>;

    /// Current position in the request lifecycle
    fn state(&self) -> RequestState;
}
