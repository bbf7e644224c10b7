//! Configuration file support for repo-catalog.
//!
//! Provides YAML-based configuration through `repo-catalog.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! file values with built-in defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::network::DEFAULT_API_BASE_URL;
use crate::application::dto::OutputFormat;
use crate::catalog::domain::FileLimit;
use crate::ports::outbound::DEFAULT_MODEL;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "repo-catalog.config.yml";

/// Default repository root, relative to the working directory
pub const DEFAULT_REPO_ROOT: &str = "repos";

/// Default session directory, relative to the working directory
pub const DEFAULT_SESSION_DIR: &str = ".repo-catalog";

/// `file_count` accepts both `10` and `"all"` in YAML
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum FileCountValue {
    Count(u64),
    Text(String),
}

impl FileCountValue {
    fn to_limit(&self) -> std::result::Result<FileLimit, String> {
        match self {
            FileCountValue::Count(n) => n.to_string().parse(),
            FileCountValue::Text(s) => s.parse(),
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repo_root: Option<PathBuf>,
    pub session_dir: Option<PathBuf>,
    pub model: Option<String>,
    pub file_count: Option<FileCountValue>,
    pub format: Option<String>,
    pub api_base_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref file_count) = config.file_count {
        if let Err(e) = file_count.to_limit() {
            bail!(
                "Invalid config: file_count is invalid. {}\n\n\
                 💡 Hint: Use one of 5, 10, 15, any positive number, or \"all\".",
                e
            );
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref model) = config.model {
        if model.trim().is_empty() {
            bail!(
                "Invalid config: model must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default model ({}).",
                DEFAULT_MODEL
            );
        }
    }

    if let Some(ref url) = config.api_base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(
                "Invalid config: api_base_url must start with http:// or https:// (got '{}').",
                url
            );
        }
    }

    for (field, path) in [("repo_root", &config.repo_root), ("session_dir", &config.session_dir)] {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!("Invalid config: {} must not be empty.", field);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Settings after merging the config file over the built-in defaults.
///
/// Command-line flags are applied on top by the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub repo_root: PathBuf,
    pub session_dir: PathBuf,
    pub model: String,
    pub file_limit: FileLimit,
    pub format: OutputFormat,
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from(DEFAULT_REPO_ROOT),
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            model: DEFAULT_MODEL.to_string(),
            file_limit: FileLimit::All,
            format: OutputFormat::Markdown,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Applies a validated config file over the defaults
    pub fn from_config(config: Option<ConfigFile>) -> Result<Self> {
        let defaults = Self::default();
        let Some(config) = config else {
            return Ok(defaults);
        };

        let file_limit = match config.file_count {
            Some(value) => value.to_limit().map_err(anyhow::Error::msg)?,
            None => defaults.file_limit,
        };
        let format = match config.format {
            Some(value) => value.parse().map_err(anyhow::Error::msg)?,
            None => defaults.format,
        };

        Ok(Self {
            repo_root: config.repo_root.unwrap_or(defaults.repo_root),
            session_dir: config.session_dir.unwrap_or(defaults.session_dir),
            model: config.model.unwrap_or(defaults.model),
            file_limit,
            format,
            api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        })
    }
}
