use std::fmt;

/// Display category derived from a component's free-text type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentCategory {
    Service,
    Library,
    Storage,
    Api,
    Application,
}

impl ComponentCategory {
    /// Classifies a free-text type by case-insensitive substring rules.
    ///
    /// Rules are checked in order, so "library service" is a Service.
    pub fn classify(component_type: &str) -> Self {
        let t = component_type.to_lowercase();
        if t.contains("service") {
            ComponentCategory::Service
        } else if t.contains("library") || t.contains("package") {
            ComponentCategory::Library
        } else if t.contains("database") || t.contains("resource") || t.contains("storage") {
            ComponentCategory::Storage
        } else if t.contains("api") {
            ComponentCategory::Api
        } else {
            ComponentCategory::Application
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ComponentCategory::Service => "🖥️",
            ComponentCategory::Library => "📚",
            ComponentCategory::Storage => "🗄️",
            ComponentCategory::Api => "🔌",
            ComponentCategory::Application => "🧩",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentCategory::Service => write!(f, "service"),
            ComponentCategory::Library => write!(f, "library"),
            ComponentCategory::Storage => write!(f, "storage"),
            ComponentCategory::Api => write!(f, "api"),
            ComponentCategory::Application => write!(f, "application"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rules() {
        assert_eq!(ComponentCategory::classify("Microservice"), ComponentCategory::Service);
        assert_eq!(ComponentCategory::classify("npm package"), ComponentCategory::Library);
        assert_eq!(ComponentCategory::classify("Library"), ComponentCategory::Library);
        assert_eq!(ComponentCategory::classify("cloud resource"), ComponentCategory::Storage);
        assert_eq!(ComponentCategory::classify("Database"), ComponentCategory::Storage);
        assert_eq!(ComponentCategory::classify("REST API"), ComponentCategory::Api);
        assert_eq!(ComponentCategory::classify("system"), ComponentCategory::Application);
        assert_eq!(ComponentCategory::classify(""), ComponentCategory::Application);
    }

    #[test]
    fn test_service_wins_over_later_rules() {
        assert_eq!(
            ComponentCategory::classify("API service"),
            ComponentCategory::Service
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ComponentCategory::Storage.to_string(), "storage");
    }
}
