use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetError};

pub const DEFAULT_CONFIG_FILE: &str = "snippets.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
    pub greeting: GreetingConfig,
    pub fonts: FontConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub preload: Vec<String>,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            greeting: GreetingConfig::default(),
            fonts: FontConfig::default(),
        }
    }
}

impl SnippetConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Defaults when `path` does not exist; read and parse errors propagate.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Never fails: an unreadable or malformed file yields the defaults plus
    /// the error, for the caller to report once logging is up.
    pub fn load_lenient(path: &Path) -> (Self, Option<SnippetError>) {
        match Self::load_or_default(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}
