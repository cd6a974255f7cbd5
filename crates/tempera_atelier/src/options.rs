//! Generator options and `tempera.config.json` loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Name of the configuration file looked up by [`load_options`].
pub const CONFIG_FILE_NAME: &str = "tempera.config.json";

/// Default path of the runtime crate in generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "::tempera_canvas";

/// Options for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Version written into the file banner; `unknown` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Path generated code uses to reach the runtime crate.
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,
}

fn default_runtime_path() -> String {
    DEFAULT_RUNTIME_PATH.to_string()
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            version: None,
            runtime_path: default_runtime_path(),
        }
    }
}

impl GeneratorOptions {
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Banner version.
    pub fn version_or_unknown(&self) -> &str {
        self.version.as_deref().unwrap_or("unknown")
    }
}

/// Load `tempera.config.json` from the given directory (or CWD if None).
///
/// A missing file yields the defaults; an unreadable or malformed one is an
/// error.
pub fn load_options(dir: Option<&Path>) -> Result<GeneratorOptions, ConfigError> {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let path = base.join(CONFIG_FILE_NAME);

    if !path.exists() {
        tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, base.display());
        return Ok(GeneratorOptions::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    GeneratorOptions::from_json(&content).map_err(|source| ConfigError::Json { path, source })
}
