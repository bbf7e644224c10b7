use crate::catalog::domain::FileLimit;
use crate::catalog::policies::InputPolicy;
use crate::ports::outbound::{AnalysisOptions, DEFAULT_MODEL};
use crate::shared::error::AnalysisError;

/// Where the text to analyze comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisSource {
    /// A directory name under the repository root
    Repository(String),
    /// Repository contents pasted as one block of text
    Text(String),
}

impl AnalysisSource {
    /// Label stored with the result and shown in views
    pub fn label(&self) -> String {
        match self {
            AnalysisSource::Repository(name) => name.clone(),
            AnalysisSource::Text(_) => "pasted text".to_string(),
        }
    }
}

/// AnalysisRequest - Validated request for the analysis use case
///
/// Constructed only through [`AnalysisRequestBuilder`], so a value of this
/// type has already passed input validation.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub source: AnalysisSource,
    pub model: String,
    pub api_key: Option<String>,
    pub file_limit: FileLimit,
}

impl AnalysisRequest {
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }

    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions::new(self.model.clone(), self.api_key.clone())
    }
}

/// Builder collecting raw form input for an [`AnalysisRequest`]
#[derive(Debug, Default)]
pub struct AnalysisRequestBuilder {
    repository: Option<String>,
    text: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    file_limit: FileLimit,
}

impl AnalysisRequestBuilder {
    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn file_limit(mut self, file_limit: FileLimit) -> Self {
        self.file_limit = file_limit;
        self
    }

    /// Validates the collected input
    ///
    /// # Errors
    /// `InvalidInput` when no source or both sources are given, when the
    /// repository identifier is invalid, or when pasted text is too short
    pub fn build(self) -> Result<AnalysisRequest, AnalysisError> {
        let source = match (self.repository, self.text) {
            (Some(_), Some(_)) => {
                return Err(AnalysisError::invalid_input(
                    "Provide either a repository or pasted repository contents, not both.",
                ));
            }
            (None, None) => {
                return Err(AnalysisError::invalid_input(
                    "Please select a repository to analyze or provide the repository contents.",
                ));
            }
            (Some(repository), None) => {
                InputPolicy::validate_repository_identifier(&repository)?;
                AnalysisSource::Repository(repository)
            }
            (None, Some(text)) => {
                InputPolicy::validate_pasted_text(&text)?;
                AnalysisSource::Text(text)
            }
        };

        let model = non_blank(self.model).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_key = non_blank(self.api_key);

        Ok(AnalysisRequest {
            source,
            model,
            api_key,
            file_limit: self.file_limit,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
