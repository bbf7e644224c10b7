use crate::shared::Result;

/// OutputPresenter port for presenting rendered views
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where a formatted view is written.
pub trait OutputPresenter {
    /// Presents the formatted content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
