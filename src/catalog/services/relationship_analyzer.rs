use crate::catalog::domain::{AnalysisResult, Component};

/// One outbound dependency edge, resolved against the current result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLink {
    pub target: String,
    /// False when no component in the result carries this name (dead link)
    pub resolved: bool,
}

/// A component together with its resolved outbound edges and its dependents
#[derive(Debug, Clone)]
pub struct ComponentRelationships<'a> {
    pub component: &'a Component,
    pub dependencies: Vec<DependencyLink>,
    pub dependents: Vec<&'a Component>,
}

/// RelationshipAnalyzer service for the dependency map and detail views
///
/// Pure logic over an [`AnalysisResult`]; no I/O. Edges are matched by exact
/// name and are never validated, so dangling references survive as
/// unresolved links.
pub struct RelationshipAnalyzer;

impl RelationshipAnalyzer {
    /// Components that declare at least one dependency, in result order
    pub fn components_with_dependencies(result: &AnalysisResult) -> Vec<&Component> {
        result
            .components()
            .iter()
            .filter(|c| c.has_dependencies())
            .collect()
    }

    /// Resolves each dependency of `component` against `result`
    pub fn resolve_links(component: &Component, result: &AnalysisResult) -> Vec<DependencyLink> {
        component
            .dependencies()
            .iter()
            .map(|dep| DependencyLink {
                target: dep.clone(),
                resolved: result.find(dep).is_some(),
            })
            .collect()
    }

    /// Builds the detail relationships for the component named `name`
    ///
    /// # Returns
    /// `None` when no component carries that exact name
    pub fn relationships<'a>(
        result: &'a AnalysisResult,
        name: &str,
    ) -> Option<ComponentRelationships<'a>> {
        let component = result.find(name)?;
        Some(ComponentRelationships {
            component,
            dependencies: Self::resolve_links(component, result),
            dependents: result.dependents_of(component.name()),
        })
    }

    /// Dependency names that match no component in the result, deduplicated
    /// in first-seen order
    pub fn dangling_dependencies(result: &AnalysisResult) -> Vec<&str> {
        let mut dangling: Vec<&str> = Vec::new();
        for component in result.components() {
            for dep in component.dependencies() {
                if result.find(dep).is_none() && !dangling.contains(&dep.as_str()) {
                    dangling.push(dep.as_str());
                }
            }
        }
        dangling
    }
}
