use crate::application::dto::{AnalysisRequest, AnalysisResponse, AnalysisSource, RequestState};
use crate::catalog::domain::{AnalysisResult, FileLimit};
use crate::catalog::policies::InputPolicy;
use crate::ports::inbound::RepositoryAnalysisPort;
use crate::ports::outbound::{
    AnalysisOptions, ComponentAnalyzer, ProgressReporter, RepositorySource, ResultStore,
    StoredAnalysis, KNOWN_MODELS,
};
use crate::shared::error::AnalysisError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Document handed to the model together with collection statistics
struct PreparedDocument {
    content: String,
    files_analyzed: usize,
    files_skipped: usize,
}

/// AnalyzeRepositoryUseCase - Core use case for repository analysis
///
/// Orchestrates collect → validate → analyze → store using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `RS` - RepositorySource implementation
/// * `CA` - ComponentAnalyzer implementation
/// * `ST` - ResultStore implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeRepositoryUseCase<RS, CA, ST, PR> {
    repository_source: RS,
    analyzer: CA,
    result_store: ST,
    progress_reporter: PR,
    state: Mutex<RequestState>,
}

impl<RS, CA, ST, PR> AnalyzeRepositoryUseCase<RS, CA, ST, PR>
where
    RS: RepositorySource,
    CA: ComponentAnalyzer,
    ST: ResultStore,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeRepositoryUseCase with injected dependencies
    pub fn new(repository_source: RS, analyzer: CA, result_store: ST, progress_reporter: PR) -> Self {
        Self {
            repository_source,
            analyzer,
            result_store,
            progress_reporter,
            state: Mutex::new(RequestState::Idle),
        }
    }

    /// Executes one analysis
    ///
    /// # Returns
    /// AnalysisResponse for both the "components found" and the
    /// "no components found" outcomes
    ///
    /// # Errors
    /// Returns a tagged AnalysisError. Input errors are raised before the
    /// model is invoked.
    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        self.begin()?;

        let result = self.run(request).await;

        self.set_state(if result.is_ok() {
            RequestState::Succeeded
        } else {
            RequestState::Failed
        });
        result
    }

    pub fn current_state(&self) -> RequestState {
        self.state.lock().map(|s| *s).unwrap_or(RequestState::Failed)
    }

    /// Moves to `Pending`, rejecting a second submission while one is running
    fn begin(&self) -> Result<(), AnalysisError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| AnalysisError::analysis_failed("Request state is unavailable"))?;

        if *state == RequestState::Pending {
            return Err(AnalysisError::invalid_input(
                "An analysis is already in progress. Please wait for it to finish.",
            ));
        }

        *state = RequestState::Pending;
        Ok(())
    }

    fn set_state(&self, next: RequestState) {
        if let Ok(mut state) = self.state.lock() {
            *state = next;
        }
    }

    async fn run(&self, request: AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        // Step 1: Produce the document
        let document = self.prepare_document(&request)?;

        // Step 2: Invoke the model
        let result = self.invoke_model(&document.content, &request.options()).await?;

        // Step 3: Store the result for the catalog, map and detail views
        let analysis = StoredAnalysis::new(request.source.label(), request.model.clone(), result);
        self.store_result(&analysis);

        Ok(AnalysisResponse::new(
            analysis,
            document.files_analyzed,
            document.files_skipped,
        ))
    }

    /// Collects a repository or passes pasted text through
    fn prepare_document(&self, request: &AnalysisRequest) -> Result<PreparedDocument, AnalysisError> {
        match &request.source {
            AnalysisSource::Repository(repository) => {
                self.collect_repository(repository, request.file_limit)
            }
            AnalysisSource::Text(text) => {
                InputPolicy::validate_pasted_text(text)?;
                Ok(PreparedDocument {
                    content: text.clone(),
                    files_analyzed: 0,
                    files_skipped: 0,
                })
            }
        }
    }

    fn collect_repository(
        &self,
        repository: &str,
        limit: FileLimit,
    ) -> Result<PreparedDocument, AnalysisError> {
        self.progress_reporter.report(&format!(
            "📂 Collecting files from repository: {} (files: {})",
            repository, limit
        ));

        let collected = self
            .repository_source
            .collect(repository, limit)
            .map_err(|e| match e.downcast_ref::<AnalysisError>() {
                Some(analysis_error) => analysis_error.clone(),
                None => AnalysisError::analysis_failed(format!(
                    "Failed to collect repository '{}': {}",
                    repository, e
                )),
            })?;

        for skipped in &collected.skipped {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped {}: {}",
                skipped.path.display(),
                skipped.reason
            ));
        }

        self.progress_reporter.report(&format!(
            "✅ Collected {} file(s) ({} characters)",
            collected.file_count(),
            collected.content.chars().count()
        ));

        InputPolicy::validate_collected_document(&collected.content, repository)?;

        Ok(PreparedDocument {
            files_analyzed: collected.file_count(),
            files_skipped: collected.skipped.len(),
            content: collected.content,
        })
    }

    async fn invoke_model(
        &self,
        document: &str,
        options: &AnalysisOptions,
    ) -> Result<AnalysisResult, AnalysisError> {
        if !KNOWN_MODELS.contains(&options.model.as_str()) {
            self.progress_reporter.report(&format!(
                "ℹ️  Model '{}' is not one of {}; sending the request anyway",
                options.model,
                KNOWN_MODELS.join(", ")
            ));
        }

        self.progress_reporter
            .report_pending(&format!("🤖 Analyzing with {}...", options.model));

        match self.analyzer.analyze(document, options).await {
            Ok(result) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Analysis complete: {} component(s) identified",
                    result.len()
                ));
                Ok(result)
            }
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Analysis failed with {}", options.model));
                Err(e)
            }
        }
    }

    /// Saves the result; a store failure is reported but does not fail the
    /// analysis
    fn store_result(&self, analysis: &StoredAnalysis) {
        if let Err(e) = self.result_store.save(analysis) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Could not save the result to {}: {}",
                self.result_store.location(),
                e
            ));
        }
    }
}

#[async_trait(?Send)]
impl<RS, CA, ST, PR> RepositoryAnalysisPort for AnalyzeRepositoryUseCase<RS, CA, ST, PR>
where
    RS: RepositorySource,
    CA: ComponentAnalyzer,
    ST: ResultStore,
    PR: ProgressReporter,
{
    async fn analyze_repository(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalysisError> {
        self.execute(request).await
    }

    fn state(&self) -> RequestState {
        self.current_state()
    }
}
