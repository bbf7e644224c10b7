use crate::catalog::domain::Component;

/// Selector value that matches every component type
pub const ALL_TYPES: &str = "all";

/// ComponentFilter - Catalog search over an analysis result
///
/// Combines a case-insensitive substring search over name, description and
/// language with an exact match on the component type (or `all`).
/// Filtering borrows the source list and never mutates it.
#[derive(Debug, Clone)]
pub struct ComponentFilter {
    search_term: String,
    type_filter: Option<String>,
}

impl ComponentFilter {
    /// Creates a filter
    ///
    /// # Arguments
    /// * `search_term` - Free-text term; empty matches everything
    /// * `type_filter` - Exact type to keep; `None` or `"all"` keeps every type
    pub fn new(search_term: &str, type_filter: Option<&str>) -> Self {
        let type_filter = type_filter
            .filter(|t| *t != ALL_TYPES)
            .map(|t| t.to_string());

        Self {
            search_term: search_term.to_lowercase(),
            type_filter,
        }
    }

    /// A filter that keeps every component
    pub fn match_all() -> Self {
        Self::new("", None)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The active type selector, `"all"` when none is set
    pub fn type_selector(&self) -> &str {
        self.type_filter.as_deref().unwrap_or(ALL_TYPES)
    }

    pub fn matches(&self, component: &Component) -> bool {
        let matches_search = component
            .search_corpus()
            .to_lowercase()
            .contains(&self.search_term);
        let matches_type = self
            .type_filter
            .as_deref()
            .is_none_or(|t| component.component_type() == t);
        matches_search && matches_type
    }

    /// Returns the matching components in source order
    pub fn apply<'a>(&self, components: &'a [Component]) -> Vec<&'a Component> {
        components.iter().filter(|c| self.matches(c)).collect()
    }
}

impl Default for ComponentFilter {
    fn default() -> Self {
        Self::match_all()
    }
}
