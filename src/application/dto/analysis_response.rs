use crate::ports::outbound::StoredAnalysis;

/// How a successful analysis ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// At least one component was identified
    ComponentsFound,
    /// The model answered with an empty component list
    NoComponentsFound,
}

/// Lifecycle of the single outstanding analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// AnalysisResponse - Response DTO from the analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub outcome: AnalysisOutcome,
    /// The analysis as saved in the result store
    pub analysis: StoredAnalysis,
    /// Number of files included in the document (0 for pasted text)
    pub files_analyzed: usize,
    /// Number of entries skipped during collection
    pub files_skipped: usize,
}

impl AnalysisResponse {
    pub fn new(analysis: StoredAnalysis, files_analyzed: usize, files_skipped: usize) -> Self {
        let outcome = if analysis.result.is_empty() {
            AnalysisOutcome::NoComponentsFound
        } else {
            AnalysisOutcome::ComponentsFound
        };

        Self {
            outcome,
            analysis,
            files_analyzed,
            files_skipped,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.outcome {
            AnalysisOutcome::ComponentsFound => "Analysis successful.",
            AnalysisOutcome::NoComponentsFound => {
                "The analysis completed, but no components were identified in the provided text."
            }
        }
    }
}
