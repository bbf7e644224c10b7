use serde::{Deserialize, Serialize};

/// Component entity describing one piece of an analyzed repository
///
/// All fields are free text supplied by the model. `name` doubles as the
/// join key for dependency edges; uniqueness is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    name: String,
    description: String,
    #[serde(rename = "type")]
    component_type: String,
    language: String,
    #[serde(default)]
    dependencies: Vec<String>,
}

impl Component {
    pub fn new(
        name: String,
        description: String,
        component_type: String,
        language: String,
        dependencies: Vec<String>,
    ) -> Self {
        Self {
            name,
            description,
            component_type,
            language,
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// Returns true if this component names `target` among its dependencies.
    /// Matching is exact: no case folding or whitespace trimming.
    pub fn depends_on(&self, target: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == target)
    }

    /// Text searched by the catalog's free-text filter
    pub fn search_corpus(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.language)
    }
}
