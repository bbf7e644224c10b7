use crate::application::read_models::CatalogReadModel;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the read model as pretty-printed JSON
///
/// Sections that were not requested are omitted from the document.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize view to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::CatalogReadModelBuilder;
    use crate::catalog::domain::{AnalysisResult, Component};
    use crate::catalog::services::ComponentFilter;
    use crate::ports::outbound::StoredAnalysis;
    use serde_json::Value;

    fn analysis() -> StoredAnalysis {
        StoredAnalysis::new(
            "pasted text".to_string(),
            "gemini-pro".to_string(),
            AnalysisResult::new(vec![Component::new(
                "Gateway".to_string(),
                "Routes requests".to_string(),
                "api".to_string(),
                "TypeScript".to_string(),
                vec!["Users".to_string()],
            )]),
        )
    }

    #[test]
    fn test_overview_json() {
        let analysis = analysis();
        let model = CatalogReadModelBuilder::new(&analysis)
            .with_catalog(&ComponentFilter::match_all())
            .with_dependency_map()
            .build();

        let output = JsonFormatter::new().format(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["metadata"]["source"], "pasted text");
        assert_eq!(json["catalog"]["components"][0]["type"], "api");
        assert_eq!(json["catalog"]["components"][0]["category"], "api");
        assert_eq!(json["dependency_map"]["entries"][0]["depends_on"][0]["resolved"], false);
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_detail_not_found_json() {
        let analysis = analysis();
        let model = CatalogReadModelBuilder::new(&analysis)
            .with_detail("Users")
            .build();

        let output = JsonFormatter::new().format(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["detail"]["status"], "not_found");
        assert_eq!(json["detail"]["name"], "Users");
        assert!(json.get("catalog").is_none());
    }
}
