/// Type alias for Result with anyhow::Error as the error type.
/// Typed errors ([`crate::shared::error::AnalysisError`], [`crate::shared::error::CatalogError`])
/// travel inside it and are recovered with `downcast_ref` at the CLI boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
