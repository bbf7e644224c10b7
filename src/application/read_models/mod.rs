//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of an analysis result for the catalog,
//! dependency map and component detail views.

pub mod catalog_read_model;
pub mod catalog_read_model_builder;
pub mod component_view;

pub use catalog_read_model::{
    AnalysisMetadataView, CatalogReadModel, CatalogSection, ComponentDetailView,
    DependencyMapEntry, DependencyMapView,
};
pub use catalog_read_model_builder::CatalogReadModelBuilder;
pub use component_view::{ComponentView, LinkView};
