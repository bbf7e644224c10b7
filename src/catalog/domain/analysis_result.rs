use super::Component;
use serde::{Deserialize, Serialize};

/// AnalysisResult aggregate: the ordered component list returned by one
/// successful model invocation
///
/// Serialized with the same `{"components": [...]}` envelope the model
/// returns, so a stored result and a model response share one shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    components: Vec<Component>,
}

impl AnalysisResult {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Looks up a component by exact name. The first match wins when names
    /// are duplicated.
    pub fn find(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    /// Components whose dependency list names `name`, in result order.
    ///
    /// Full linear scan over every component's dependencies; there is no
    /// index.
    pub fn dependents_of(&self, name: &str) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| c.depends_on(name))
            .collect()
    }

    /// Distinct component types in first-seen order
    pub fn component_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for component in &self.components {
            let component_type = component.component_type();
            if !types.contains(&component_type) {
                types.push(component_type);
            }
        }
        types
    }
}
