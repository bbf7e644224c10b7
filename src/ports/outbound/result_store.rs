use crate::catalog::domain::AnalysisResult;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The last successful analysis together with where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    /// Repository identifier, or `"pasted text"` for free-text input
    pub source: String,
    pub model: String,
    pub result: AnalysisResult,
}

impl StoredAnalysis {
    pub fn new(source: String, model: String, result: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            source,
            model,
            result,
        }
    }
}

/// ResultStore port holding the last successful analysis
///
/// The store has an explicit lifecycle: adapters are opened by their
/// constructor, `save` overwrites the previous entry, and `clear` ends the
/// session. Entries written in another format version are not migrated.
pub trait ResultStore {
    /// Saves `analysis`, replacing any previous entry
    ///
    /// # Errors
    /// Returns an error if the entry cannot be serialized or written
    fn save(&self, analysis: &StoredAnalysis) -> Result<()>;

    /// Loads the last saved analysis
    ///
    /// # Returns
    /// `None` if nothing was saved in this session, or the entry has an
    /// unsupported format version
    ///
    /// # Errors
    /// Returns an error if the store exists but cannot be read or parsed
    fn load(&self) -> Result<Option<StoredAnalysis>>;

    /// Removes the saved analysis
    ///
    /// # Errors
    /// Returns an error if the entry exists but cannot be removed
    fn clear(&self) -> Result<()>;

    /// Human-readable location of the store, used in messages
    fn location(&self) -> String;
}
