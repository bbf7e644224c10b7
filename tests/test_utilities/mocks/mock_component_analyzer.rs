use async_trait::async_trait;
use repo_catalog::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ComponentAnalyzer returning a canned result and recording calls
#[derive(Clone)]
pub struct MockComponentAnalyzer {
    response: std::result::Result<AnalysisResult, AnalysisError>,
    pub documents: Arc<Mutex<Vec<String>>>,
    pub models: Arc<Mutex<Vec<String>>>,
}

impl MockComponentAnalyzer {
    pub fn returning(components: Vec<Component>) -> Self {
        Self {
            response: Ok(AnalysisResult::new(components)),
            documents: Arc::new(Mutex::new(Vec::new())),
            models: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(AnalysisError::analysis_failed(message)),
            documents: Arc::new(Mutex::new(Vec::new())),
            models: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn last_document(&self) -> Option<String> {
        self.documents.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ComponentAnalyzer for MockComponentAnalyzer {
    async fn analyze(
        &self,
        document: &str,
        options: &AnalysisOptions,
    ) -> std::result::Result<AnalysisResult, AnalysisError> {
        self.documents.lock().unwrap().push(document.to_string());
        self.models.lock().unwrap().push(options.model.clone());
        self.response.clone()
    }
}
