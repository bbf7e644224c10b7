mod component_filter;
mod relationship_analyzer;

pub use component_filter::{ComponentFilter, ALL_TYPES};
pub use relationship_analyzer::{ComponentRelationships, DependencyLink, RelationshipAnalyzer};
