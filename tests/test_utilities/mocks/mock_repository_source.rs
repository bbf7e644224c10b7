use repo_catalog::prelude::*;
use std::path::PathBuf;

/// Mock RepositorySource serving in-memory repositories
pub struct MockRepositorySource {
    repositories: Vec<(String, Vec<(String, String)>)>,
}

impl MockRepositorySource {
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
        }
    }

    pub fn with_repository(mut self, name: &str, files: &[(&str, &str)]) -> Self {
        self.repositories.push((
            name.to_string(),
            files
                .iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
        ));
        self
    }
}

impl RepositorySource for MockRepositorySource {
    fn list_repositories(&self) -> Result<Vec<String>> {
        Ok(self.repositories.iter().map(|(name, _)| name.clone()).collect())
    }

    fn collect(&self, repository: &str, limit: FileLimit) -> Result<CollectedDocument> {
        let (_, files) = self
            .repositories
            .iter()
            .find(|(name, _)| name == repository)
            .ok_or_else(|| AnalysisError::NotFound {
                path: PathBuf::from("repos").join(repository),
            })?;

        let mut files = files.clone();
        limit.apply(&mut files);

        let mut document = CollectedDocument::default();
        for (path, content) in files {
            document
                .content
                .push_str(&format!("--- File: {} ---\n{}\n\n", path, content));
            document.files.push(path);
        }
        Ok(document)
    }
}
