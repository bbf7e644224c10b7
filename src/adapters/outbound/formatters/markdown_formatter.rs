use crate::application::read_models::{
    AnalysisMetadataView, CatalogReadModel, CatalogSection, ComponentDetailView, ComponentView,
    DependencyMapView, LinkView,
};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// Markdown table header for the component catalog
const TABLE_HEADER: &str = "| | Component | Type | Language | Description | Dependencies |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---|-----------|------|----------|-------------|--------------|\n";

/// MarkdownFormatter adapter rendering catalog views as Markdown
///
/// Resolved component links point at the component's detail route; dead
/// links render as struck-through plain text.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Escapes a component name for use as link text or struck-through text
    ///
    /// Brackets, parentheses, emphasis markers and backslashes would otherwise
    /// close or reshape the surrounding link.
    fn escape_link_text(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\\' | '[' | ']' | '(' | ')' | '*' | '_' | '~' | '`' | '|' => {
                    escaped.push('\\');
                    escaped.push(c);
                }
                '\n' | '\r' => escaped.push(' '),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn render_link(link: &LinkView) -> String {
        if link.resolved {
            format!("[{}]({})", Self::escape_link_text(&link.name), link.route)
        } else {
            format!(
                "~~{}~~ ⚠️ not found",
                Self::escape_link_text(&link.name)
            )
        }
    }

    fn render_links(links: &[LinkView]) -> String {
        links
            .iter()
            .map(Self::render_link)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &AnalysisMetadataView) {
        output.push_str("# Component Catalog\n\n");
        output.push_str(&format!(
            "- **Source**: {}\n- **Model**: {}\n- **Analyzed at**: {}\n- **Components**: {}\n",
            metadata.source, metadata.model, metadata.saved_at, metadata.component_count
        ));
        if !metadata.dead_links.is_empty() {
            output.push_str(&format!(
                "- **Dead links**: {} ({})\n",
                metadata.dead_links.len(),
                metadata
                    .dead_links
                    .iter()
                    .map(|name| Self::escape_link_text(name))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        output.push('\n');
    }

    fn render_catalog(&self, output: &mut String, catalog: &CatalogSection) {
        output.push_str("## Components\n\n");

        if !catalog.search_term.is_empty() {
            output.push_str(&format!("Search: `{}`  \n", catalog.search_term));
        }
        output.push_str(&format!(
            "Type: `{}` (available: {})  \n",
            catalog.type_filter,
            catalog.available_types.join(", ")
        ));
        output.push_str(&format!(
            "Showing {} of {} component(s)\n\n",
            catalog.components.len(),
            catalog.total_count
        ));

        if catalog.components.is_empty() {
            output.push_str("No components match your criteria.\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for component in &catalog.components {
            self.render_catalog_row(output, component);
        }
        output.push('\n');
    }

    fn render_catalog_row(&self, output: &mut String, component: &ComponentView) {
        let dependencies = if component.dependencies.is_empty() {
            "-".to_string()
        } else {
            Self::escape_markdown_table_cell(&component.dependencies.join(", "))
        };

        output.push_str(&format!(
            "| {} | [{}]({}) | {} | {} | {} | {} |\n",
            component.icon,
            Self::escape_link_text(&component.name),
            component.route,
            Self::escape_markdown_table_cell(&component.component_type),
            Self::escape_markdown_table_cell(&component.language),
            Self::escape_markdown_table_cell(&component.description),
            dependencies
        ));
    }

    fn render_dependency_map(
        &self,
        output: &mut String,
        map: &DependencyMapView,
        component_count: usize,
    ) {
        output.push_str("## Component Relationships\n\n");

        if component_count == 0 {
            output.push_str("No components to display in the map.\n\n");
            return;
        }
        if map.is_empty() {
            output.push_str("No component dependencies were identified.\n\n");
            return;
        }

        for entry in &map.entries {
            output.push_str(&format!(
                "- {} depends on: {}\n",
                Self::render_link(&entry.component),
                Self::render_links(&entry.depends_on)
            ));
        }
        output.push('\n');
    }

    fn render_detail(&self, output: &mut String, detail: &ComponentDetailView) {
        match detail {
            ComponentDetailView::NotFound { name } => {
                output.push_str("## Component Not Found\n\n");
                output.push_str(&format!(
                    "No component named `{}` exists in the current analysis.\n\n",
                    name
                ));
            }
            ComponentDetailView::Found {
                component,
                dependencies,
                dependents,
            } => {
                output.push_str(&format!("## {} {}\n\n", component.icon, component.name));
                output.push_str(&format!(
                    "- **Type**: {}\n- **Category**: {}\n- **Language**: {}\n\n",
                    component.component_type, component.category, component.language
                ));
                output.push_str(&format!("{}\n\n", component.description));

                output.push_str("### Dependencies\n\n");
                if dependencies.is_empty() {
                    output.push_str("No dependencies identified.\n\n");
                } else {
                    for link in dependencies {
                        output.push_str(&format!("- {}\n", Self::render_link(link)));
                    }
                    output.push('\n');
                }

                output.push_str("### Dependents\n\n");
                if dependents.is_empty() {
                    output.push_str("Not used by any other identified components.\n\n");
                } else {
                    for link in dependents {
                        output.push_str(&format!("- {}\n", Self::render_link(link)));
                    }
                    output.push('\n');
                }
            }
        }
    }
}

impl CatalogFormatter for MarkdownFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);

        if let Some(catalog) = &model.catalog {
            self.render_catalog(&mut output, catalog);
        }
        if let Some(map) = &model.dependency_map {
            self.render_dependency_map(&mut output, map, model.metadata.component_count);
        }
        if let Some(detail) = &model.detail {
            self.render_detail(&mut output, detail);
        }

        Ok(output)
    }
}
