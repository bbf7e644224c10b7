use crate::application::read_models::CatalogReadModel;
use crate::shared::Result;

/// CatalogFormatter port for rendering catalog views
///
/// This port abstracts the rendering of the catalog, dependency map and
/// component detail views into an output format (Markdown, JSON, etc.).
pub trait CatalogFormatter {
    /// Renders every section present in the read model
    ///
    /// # Arguments
    /// * `model` - The read model; absent sections are not rendered
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CatalogReadModel) -> Result<String>;
}
