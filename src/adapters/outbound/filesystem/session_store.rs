use crate::ports::outbound::{ResultStore, StoredAnalysis};
use crate::shared::error::CatalogError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key under which the last analysis is stored
pub const ANALYSIS_RESULT_KEY: &str = "analysisResult";

/// Current on-disk format version
pub const SESSION_FORMAT_VERSION: u32 = 1;

const SESSION_FILE_NAME: &str = "session.json";

/// On-disk envelope: a versioned key-value map
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, serde_json::Value>,
}

/// Only the version is read first, so an envelope of another version never
/// has to parse
#[derive(Debug, Deserialize)]
struct VersionProbe {
    version: u32,
}

/// FileSessionStore adapter persisting the last analysis between commands
///
/// The session lives in `<session_dir>/session.json`. The directory is
/// created on the first save; `clear` deletes the file and so ends the
/// session.
pub struct FileSessionStore {
    session_dir: PathBuf,
}

impl FileSessionStore {
    /// Opens the session rooted at `session_dir`
    ///
    /// # Errors
    /// Returns `CatalogError::SessionStoreError` if the path exists but is not
    /// a directory
    pub fn open(session_dir: impl Into<PathBuf>) -> Result<Self> {
        let session_dir = session_dir.into();
        if session_dir.exists() && !session_dir.is_dir() {
            return Err(CatalogError::SessionStoreError {
                path: session_dir,
                details: "Path exists but is not a directory".to_string(),
            }
            .into());
        }
        Ok(Self { session_dir })
    }

    pub fn session_file(&self) -> PathBuf {
        self.session_dir.join(SESSION_FILE_NAME)
    }

    fn store_error(&self, details: impl Into<String>) -> anyhow::Error {
        CatalogError::SessionStoreError {
            path: self.session_file(),
            details: details.into(),
        }
        .into()
    }

    /// Reads the envelope, or `None` when absent or of another version
    fn read_envelope(&self, path: &Path) -> Result<Option<SessionFile>> {
        if !path.exists() {
            return Ok(None);
        }
        validate_not_symlink(path, "read the session file")?;

        let content = fs::read_to_string(path).map_err(|e| self.store_error(e.to_string()))?;
        let probe: VersionProbe = serde_json::from_str(&content)
            .map_err(|e| self.store_error(format!("Malformed session file: {}", e)))?;
        if probe.version != SESSION_FORMAT_VERSION {
            return Ok(None);
        }

        let envelope = serde_json::from_str(&content)
            .map_err(|e| self.store_error(format!("Malformed session file: {}", e)))?;
        Ok(Some(envelope))
    }
}

impl ResultStore for FileSessionStore {
    fn save(&self, analysis: &StoredAnalysis) -> Result<()> {
        let path = self.session_file();
        let mut envelope = self.read_envelope(&path).ok().flatten().unwrap_or(SessionFile {
            version: SESSION_FORMAT_VERSION,
            entries: BTreeMap::new(),
        });

        let value = serde_json::to_value(analysis)
            .map_err(|e| self.store_error(format!("Failed to serialize result: {}", e)))?;
        envelope.entries.insert(ANALYSIS_RESULT_KEY.to_string(), value);

        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|e| self.store_error(format!("Failed to serialize session: {}", e)))?;

        fs::create_dir_all(&self.session_dir).map_err(|e| self.store_error(e.to_string()))?;
        if path.exists() {
            validate_not_symlink(&path, "write the session file")?;
        }

        // Write-then-rename: readers never see a partial session file
        let tmp_path = self.session_dir.join(format!("{}.tmp", SESSION_FILE_NAME));
        fs::write(&tmp_path, json).map_err(|e| self.store_error(e.to_string()))?;
        fs::rename(&tmp_path, &path).map_err(|e| self.store_error(e.to_string()))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredAnalysis>> {
        let Some(envelope) = self.read_envelope(&self.session_file())? else {
            return Ok(None);
        };

        match envelope.entries.get(ANALYSIS_RESULT_KEY) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| self.store_error(format!("Malformed stored result: {}", e))),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<()> {
        let path = self.session_file();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| self.store_error(e.to_string()))?;
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.session_file().display().to_string()
    }
}

/// InMemoryResultStore adapter with process lifetime
///
/// Used by tests and by library callers that do not want a session file.
#[derive(Default)]
pub struct InMemoryResultStore {
    entry: Mutex<Option<StoredAnalysis>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for InMemoryResultStore {
    fn save(&self, analysis: &StoredAnalysis) -> Result<()> {
        let mut entry = self
            .entry
            .lock()
            .map_err(|_| anyhow::anyhow!("In-memory store lock poisoned"))?;
        *entry = Some(analysis.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredAnalysis>> {
        let entry = self
            .entry
            .lock()
            .map_err(|_| anyhow::anyhow!("In-memory store lock poisoned"))?;
        Ok(entry.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut entry = self
            .entry
            .lock()
            .map_err(|_| anyhow::anyhow!("In-memory store lock poisoned"))?;
        *entry = None;
        Ok(())
    }

    fn location(&self) -> String {
        "in-memory session".to_string()
    }
}
