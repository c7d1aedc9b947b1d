use dpapi_error::DpapiError;
use dpapi_models::CompareOptions;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

fn default_log_level() -> String {
    "info".to_string()
}

fn default_nil_same_as_empty() -> bool {
    true
}

fn default_pretty() -> bool {
    true
}

/// Serialization used when printing documents and change sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = DpapiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(DpapiError::ConfigError(format!(
                "Unknown output format '{}', expected json or yaml",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RuntimeConfig {
    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Treat an absent sub-block like an empty one when comparing
    #[serde(default = "default_nil_same_as_empty")]
    pub nil_same_as_empty: bool,

    /// Output format of `show` and `diff`
    #[serde(default)]
    pub output: OutputFormat,

    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            nil_same_as_empty: default_nil_same_as_empty(),
            output: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

impl FromStr for RuntimeConfig {
    type Err = DpapiError;

    /// Parse the runtime config from a YAML string
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(s).map_err(|e| DpapiError::ConfigError(e.to_string()))
    }
}

impl RuntimeConfig {
    /// Load the runtime config from a file
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the settings file
    ///
    /// # Returns
    ///
    /// * `Result<Self, DpapiError>` - The result of the operation
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DpapiError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DpapiError::ConfigError(format!("Unable to read settings {:?}: {}", path, e))
        })?;
        Self::from_str(&content)
    }

    /// Comparison options derived from the settings.
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            nil_same_as_empty: self.nil_same_as_empty,
        }
    }
}
