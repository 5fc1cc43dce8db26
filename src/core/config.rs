//! Runtime configuration loaded from YAML

use crate::core::error::{ScaffoldError, ScaffoldResult};
use crate::core::options::ExampleStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file for the scaffolder
///
/// ```yaml
/// command_timeout_secs: 900
/// shell: bash
/// defaults:
///   library_prefix: acme
///   example_style: less
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Timeout for each external command script; 0 disables it
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,

    /// Shell used to run command scripts
    #[serde(default)]
    pub shell: Option<String>,

    /// Directory holding the template resources
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    /// Directory the workspace is created in
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Fallback option values
    #[serde(default)]
    pub defaults: OptionDefaults,
}

/// Option values used when the command line leaves them out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDefaults {
    #[serde(default)]
    pub author_full_name: Option<String>,

    #[serde(default)]
    pub library_prefix: Option<String>,

    #[serde(default)]
    pub example_style: Option<ExampleStyle>,
}

pub const DEFAULT_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_SHELL: &str = "sh";

impl ScaffoldConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScaffoldResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::fs(path, e))?;
        Self::parse(&content)
            .map_err(|e| ScaffoldError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> ScaffoldResult<Self> {
        Self::parse(yaml).map_err(|e| ScaffoldError::Config(e.to_string()))
    }

    fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to null, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// `<config dir>/ngx-scaffold/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ngx-scaffold").join("config.yaml"))
    }

    /// Load an explicit file, or the default file if it exists, or defaults
    pub fn load(explicit: Option<&Path>) -> ScaffoldResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Effective command timeout; `None` means wait forever
    pub fn timeout_secs(&self) -> Option<u64> {
        match self.command_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(secs),
        }
    }

    pub fn shell(&self) -> &str {
        self.shell.as_deref().unwrap_or(DEFAULT_SHELL)
    }
}
