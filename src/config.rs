//! Tool configuration with optional TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::types::{GraphError, GraphResult};

/// Complete tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Output configuration
    pub output: OutputConfig,

    /// Interactive session configuration
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Text or JSON
    pub format: OutputFormat,

    /// Pretty-print JSON
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Keep line history between runs
    pub history: bool,

    /// Prompt shown before each line
    pub prompt: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history: true,
            prompt: "graph> ".to_string(),
        }
    }
}

impl ToolConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> GraphResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> GraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Where REPL history is kept.
    pub fn history_path(&self) -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".gtutor_history")
    }
}
