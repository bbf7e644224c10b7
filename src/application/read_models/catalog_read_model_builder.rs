//! Builder for constructing CatalogReadModel from a stored analysis
//!
//! This module transforms domain objects into the render-ready read model.

use super::catalog_read_model::{
    AnalysisMetadataView, CatalogReadModel, CatalogSection, ComponentDetailView,
    DependencyMapEntry, DependencyMapView,
};
use super::component_view::{ComponentView, LinkView};
use crate::catalog::domain::AnalysisResult;
use crate::catalog::services::{ComponentFilter, DependencyLink, RelationshipAnalyzer, ALL_TYPES};
use crate::ports::outbound::StoredAnalysis;

/// Builder for constructing CatalogReadModel
///
/// Each `with_*` call adds one section; the catalog, map and detail views
/// are independent and can be combined.
pub struct CatalogReadModelBuilder<'a> {
    analysis: &'a StoredAnalysis,
    catalog: Option<CatalogSection>,
    dependency_map: Option<DependencyMapView>,
    detail: Option<ComponentDetailView>,
}

impl<'a> CatalogReadModelBuilder<'a> {
    pub fn new(analysis: &'a StoredAnalysis) -> Self {
        Self {
            analysis,
            catalog: None,
            dependency_map: None,
            detail: None,
        }
    }

    /// Adds the catalog section filtered by `filter`
    pub fn with_catalog(mut self, filter: &ComponentFilter) -> Self {
        self.catalog = Some(Self::build_catalog(&self.analysis.result, filter));
        self
    }

    /// Adds the dependency map section
    pub fn with_dependency_map(mut self) -> Self {
        self.dependency_map = Some(Self::build_dependency_map(&self.analysis.result));
        self
    }

    /// Adds the detail section for the component named `name`
    pub fn with_detail(mut self, name: &str) -> Self {
        self.detail = Some(Self::build_detail(&self.analysis.result, name));
        self
    }

    pub fn build(self) -> CatalogReadModel {
        CatalogReadModel {
            metadata: Self::build_metadata(self.analysis),
            catalog: self.catalog,
            dependency_map: self.dependency_map,
            detail: self.detail,
        }
    }

    fn build_metadata(analysis: &StoredAnalysis) -> AnalysisMetadataView {
        AnalysisMetadataView {
            analysis_id: analysis.id.to_string(),
            source: analysis.source.clone(),
            model: analysis.model.clone(),
            saved_at: analysis.saved_at.to_rfc3339(),
            component_count: analysis.result.len(),
            dead_links: RelationshipAnalyzer::dangling_dependencies(&analysis.result)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    fn build_catalog(result: &AnalysisResult, filter: &ComponentFilter) -> CatalogSection {
        let mut available_types = vec![ALL_TYPES.to_string()];
        available_types.extend(result.component_types().iter().map(|t| t.to_string()));

        CatalogSection {
            search_term: filter.search_term().to_string(),
            type_filter: filter.type_selector().to_string(),
            available_types,
            total_count: result.len(),
            components: filter
                .apply(result.components())
                .into_iter()
                .map(ComponentView::from_component)
                .collect(),
        }
    }

    fn build_dependency_map(result: &AnalysisResult) -> DependencyMapView {
        let entries = RelationshipAnalyzer::components_with_dependencies(result)
            .into_iter()
            .map(|component| DependencyMapEntry {
                component: LinkView::new(component.name(), true),
                depends_on: Self::links(RelationshipAnalyzer::resolve_links(component, result)),
            })
            .collect();

        DependencyMapView { entries }
    }

    fn build_detail(result: &AnalysisResult, name: &str) -> ComponentDetailView {
        match RelationshipAnalyzer::relationships(result, name) {
            Some(rel) => ComponentDetailView::Found {
                component: ComponentView::from_component(rel.component),
                dependencies: Self::links(rel.dependencies),
                dependents: rel
                    .dependents
                    .iter()
                    .map(|c| LinkView::new(c.name(), true))
                    .collect(),
            },
            None => ComponentDetailView::NotFound {
                name: name.to_string(),
            },
        }
    }

    fn links(links: Vec<DependencyLink>) -> Vec<LinkView> {
        links
            .into_iter()
            .map(|link| LinkView::new(&link.target, link.resolved))
            .collect()
    }
}
