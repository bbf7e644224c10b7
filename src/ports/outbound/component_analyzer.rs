use crate::catalog::domain::AnalysisResult;
use crate::shared::error::AnalysisError;
use async_trait::async_trait;

/// Model selected when the request does not name one
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Models offered by the analysis form
pub const KNOWN_MODELS: [&str; 3] = ["gemini-1.5-pro", "gemini-1.5-flash", "gemini-pro"];

/// Per-request options forwarded to the model backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub model: String,
    /// Overrides the backend's default credentials when present
    pub api_key: Option<String>,
}

impl AnalysisOptions {
    pub fn new(model: String, api_key: Option<String>) -> Self {
        Self { model, api_key }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL.to_string(), None)
    }
}

/// ComponentAnalyzer port: the generative-model capability
///
/// Implementations send the document with a fixed instruction prompt and a
/// declared output schema, and return only results that conform to it.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the use case can hold them
/// across await points.
#[async_trait]
pub trait ComponentAnalyzer: Send + Sync {
    /// Analyzes a repository document
    ///
    /// # Returns
    /// The component list; an empty list is a valid result
    ///
    /// # Errors
    /// `AnalysisFailed` when the backend is unreachable, rejects the request,
    /// or returns data that does not match the schema
    async fn analyze(
        &self,
        document: &str,
        options: &AnalysisOptions,
    ) -> Result<AnalysisResult, AnalysisError>;
}
