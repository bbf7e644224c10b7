//! Catalog read model for query operations
//!
//! This module provides the main read model struct that aggregates the
//! sections a view can show. Sections left as `None` are not rendered.

use super::component_view::{ComponentView, LinkView};
use serde::Serialize;

/// Main read model for a stored analysis
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReadModel {
    pub metadata: AnalysisMetadataView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_map: Option<DependencyMapView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ComponentDetailView>,
}

/// View representation of where a result came from
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadataView {
    pub analysis_id: String,
    pub source: String,
    pub model: String,
    pub saved_at: String,
    pub component_count: usize,
    /// Dependency names that match no component, in first-seen order
    pub dead_links: Vec<String>,
}

/// The filtered component catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSection {
    pub search_term: String,
    pub type_filter: String,
    /// Selector values: `all` followed by every distinct type
    pub available_types: Vec<String>,
    pub total_count: usize,
    pub components: Vec<ComponentView>,
}

/// Components that declare dependencies, each with its outbound edges
#[derive(Debug, Clone, Serialize)]
pub struct DependencyMapView {
    pub entries: Vec<DependencyMapEntry>,
}

impl DependencyMapView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DependencyMapEntry {
    pub component: LinkView,
    pub depends_on: Vec<LinkView>,
}

/// Detail view of one component, or the explicit not-found state
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComponentDetailView {
    Found {
        component: ComponentView,
        dependencies: Vec<LinkView>,
        dependents: Vec<LinkView>,
    },
    NotFound {
        name: String,
    },
}

impl ComponentDetailView {
    pub fn is_found(&self) -> bool {
        matches!(self, ComponentDetailView::Found { .. })
    }
}
