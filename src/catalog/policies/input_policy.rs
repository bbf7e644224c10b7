use crate::shared::error::AnalysisError;
use crate::shared::security::validate_path_segment;

/// Minimum number of characters a document must have to be worth analyzing
///
/// Counted in Unicode scalar values (`char`), not bytes or UTF-16 units.
pub const MIN_CONTENT_LENGTH: usize = 100;

/// InputPolicy encodes the rules a request must pass before the model is
/// invoked
///
/// Pasted text that is too short is an input error; a collected document that
/// is too short means the repository had nothing readable in it.
pub struct InputPolicy;

impl InputPolicy {
    /// Message shown when pasted contents are below the minimum
    pub fn too_short_message() -> String {
        format!(
            "Repository contents must be at least {} characters to provide a meaningful analysis.",
            MIN_CONTENT_LENGTH
        )
    }

    /// Validates pasted repository contents
    ///
    /// # Errors
    /// `InvalidInput` if the text has fewer than [`MIN_CONTENT_LENGTH`] characters
    pub fn validate_pasted_text(text: &str) -> Result<(), AnalysisError> {
        if text.chars().count() < MIN_CONTENT_LENGTH {
            return Err(AnalysisError::invalid_input(Self::too_short_message()));
        }
        Ok(())
    }

    /// Validates a document produced by the file collector
    ///
    /// # Errors
    /// `EmptyInput` if the document has fewer than [`MIN_CONTENT_LENGTH`] characters
    pub fn validate_collected_document(document: &str, source: &str) -> Result<(), AnalysisError> {
        if document.chars().count() < MIN_CONTENT_LENGTH {
            return Err(AnalysisError::empty_input(format!(
                "The collected contents of '{}' are too small to analyze (minimum {} characters). \
                 Check that the repository contains readable text files.",
                source, MIN_CONTENT_LENGTH
            )));
        }
        Ok(())
    }

    /// Validates a repository identifier selected by the user
    ///
    /// # Errors
    /// `InvalidInput` if the identifier is blank or is not a single path segment
    pub fn validate_repository_identifier(identifier: &str) -> Result<(), AnalysisError> {
        if identifier.trim().is_empty() {
            return Err(AnalysisError::invalid_input(
                "Please select a repository to analyze.",
            ));
        }

        validate_path_segment(identifier, "Repository identifier")
            .map_err(|e| AnalysisError::invalid_input(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AnalysisErrorKind;

    #[test]
    fn test_pasted_text_below_minimum_is_invalid_input() {
        let err = InputPolicy::validate_pasted_text(&"x".repeat(MIN_CONTENT_LENGTH - 1)).unwrap_err();
        assert_eq!(err.kind(), AnalysisErrorKind::InvalidInput);
        assert!(err.to_string().contains("at least 100 characters"));
    }

    #[test]
    fn test_pasted_text_at_minimum_is_accepted() {
        assert!(InputPolicy::validate_pasted_text(&"x".repeat(MIN_CONTENT_LENGTH)).is_ok());
    }

    #[test]
    fn test_pasted_text_counts_characters_not_bytes() {
        // 99 multi-byte characters are still too short
        let text = "é".repeat(MIN_CONTENT_LENGTH - 1);
        assert!(text.len() > MIN_CONTENT_LENGTH);
        assert!(InputPolicy::validate_pasted_text(&text).is_err());
    }

    #[test]
    fn test_pasted_text_counts_astral_characters_once() {
        // Each emoji is one char but two UTF-16 code units
        let enough = "🦀".repeat(MIN_CONTENT_LENGTH);
        assert_eq!(enough.encode_utf16().count(), MIN_CONTENT_LENGTH * 2);
        assert!(InputPolicy::validate_pasted_text(&enough).is_ok());

        let short = "🦀".repeat(MIN_CONTENT_LENGTH - 1);
        assert!(InputPolicy::validate_pasted_text(&short).is_err());
    }

    #[test]
    fn test_collected_document_below_minimum_is_empty_input() {
        let err = InputPolicy::validate_collected_document("", "demo").unwrap_err();
        assert_eq!(err.kind(), AnalysisErrorKind::EmptyInput);
        assert!(err.to_string().contains("'demo'"));
    }

    #[test]
    fn test_repository_identifier_blank() {
        let err = InputPolicy::validate_repository_identifier("   ").unwrap_err();
        assert_eq!(err.kind(), AnalysisErrorKind::InvalidInput);
    }

    #[test]
    fn test_repository_identifier_traversal() {
        let err = InputPolicy::validate_repository_identifier("../etc").unwrap_err();
        assert_eq!(err.kind(), AnalysisErrorKind::InvalidInput);
    }

    #[test]
    fn test_repository_identifier_valid() {
        assert!(InputPolicy::validate_repository_identifier("shop-backend").is_ok());
    }
}
