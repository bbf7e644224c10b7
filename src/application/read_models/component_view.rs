//! Component view structs for read model
//!
//! These structs provide a flattened, render-ready view of component data.

use crate::catalog::domain::Component;
use crate::catalog::policies::ComponentCategory;
use serde::Serialize;

/// Route of the detail view for a component name
pub fn detail_route(name: &str) -> String {
    format!("component/{}", urlencoding::encode(name))
}

/// View representation of a catalog component
#[derive(Debug, Clone, Serialize)]
pub struct ComponentView {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub language: String,
    /// Display category derived from the free-text type
    pub category: String,
    #[serde(skip)]
    pub icon: &'static str,
    pub dependencies: Vec<String>,
    /// Route to this component's detail view
    pub route: String,
}

impl ComponentView {
    pub fn from_component(component: &Component) -> Self {
        let category = ComponentCategory::classify(component.component_type());
        Self {
            name: component.name().to_string(),
            description: component.description().to_string(),
            component_type: component.component_type().to_string(),
            language: component.language().to_string(),
            category: category.to_string(),
            icon: category.icon(),
            dependencies: component.dependencies().to_vec(),
            route: detail_route(component.name()),
        }
    }
}

/// A named link to another component's detail view
///
/// Unresolved links point at a name with no component behind it and render
/// as dead links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub name: String,
    pub route: String,
    pub resolved: bool,
}

impl LinkView {
    pub fn new(name: &str, resolved: bool) -> Self {
        Self {
            name: name.to_string(),
            route: detail_route(name),
            resolved,
        }
    }
}
