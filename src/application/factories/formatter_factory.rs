use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CatalogFormatter;

/// Picks the formatter adapter for `--format` / `format:`
pub struct FormatterFactory;

impl FormatterFactory {
    /// # Examples
    /// ```
    /// use repo_catalog::application::dto::OutputFormat;
    /// use repo_catalog::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CatalogFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress line printed before rendering
    ///
    /// # Examples
    /// ```
    /// use repo_catalog::application::dto::OutputFormat;
    /// use repo_catalog::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON output...",
            OutputFormat::Markdown => "📝 Rendering Markdown output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::CatalogReadModelBuilder;
    use crate::catalog::domain::AnalysisResult;
    use crate::ports::outbound::StoredAnalysis;

    fn render(format: OutputFormat) -> String {
        let analysis = StoredAnalysis::new(
            "shop".to_string(),
            "gemini-pro".to_string(),
            AnalysisResult::default(),
        );
        let model = CatalogReadModelBuilder::new(&analysis).build();
        FormatterFactory::create(format).format(&model).unwrap()
    }

    #[test]
    fn test_create_json_formatter() {
        assert!(render(OutputFormat::Json).trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_markdown_formatter() {
        assert!(render(OutputFormat::Markdown).starts_with("# Component Catalog"));
    }

    #[test]
    fn test_progress_message_markdown() {
        let message = FormatterFactory::progress_message(OutputFormat::Markdown);
        assert_eq!(message, "📝 Rendering Markdown output...");
    }
}
