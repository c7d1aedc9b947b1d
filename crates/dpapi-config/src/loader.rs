use crate::{MAX_DEPTH, OutputFormat, utils::read_dir_recursive};
use dpapi_error::DpapiError;
use dpapi_models::Configuration;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Document syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a single document. Blank input is an empty configuration.
pub fn parse(content: &str, format: DocumentFormat) -> Result<Configuration, DpapiError> {
    if content.trim().is_empty() {
        return Ok(Configuration::default());
    }
    match format {
        DocumentFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| DpapiError::ParseError(e.to_string()))
        }
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| DpapiError::ParseError(e.to_string()))
        }
    }
}

/// Load a configuration from a single `.yaml`, `.yml` or `.json` file
///
/// # Arguments
///
/// * `path` - The path to the document
///
/// # Returns
///
/// * `Result<Configuration, DpapiError>` - The parsed document
pub fn from_file(path: &Path) -> Result<Configuration, DpapiError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        DpapiError::ConfigError(format!("Unsupported document extension: {:?}", path))
    })?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| DpapiError::IoError(format!("Unable to read {:?}: {}", path, e)))?;
    parse(&content, format).map_err(|e| match e {
        DpapiError::ParseError(msg) => DpapiError::ParseError(format!("{:?}: {}", path, msg)),
        other => other,
    })
}

/// Load every document below `dir` and merge them in path order.
///
/// Files with other extensions are skipped.
pub fn from_dir(dir: &Path) -> Result<Configuration, DpapiError> {
    let mut config = Configuration::default();
    for file in read_dir_recursive(dir, MAX_DEPTH)? {
        if DocumentFormat::from_path(&file).is_none() {
            warn!("Skipping {:?}: not a YAML or JSON document", file);
            continue;
        }
        debug!("Loading {:?}", file);
        let fragment = from_file(&file)?;
        merge(&mut config, fragment, &file)?;
    }
    Ok(config)
}

/// Append the sections of `fragment` to `config`.
///
/// A second `global` section is rejected; repeated names in the other
/// sections are left to validation.
pub fn merge(
    config: &mut Configuration,
    fragment: Configuration,
    source: &Path,
) -> Result<(), DpapiError> {
    if let Some(global) = fragment.global {
        if config.global.is_some() {
            return Err(DpapiError::ConfigError(format!(
                "Duplicate global section in {:?}",
                source
            )));
        }
        config.global = Some(global);
    }
    config.defaults.extend(fragment.defaults);
    config.backends.extend(fragment.backends);
    config.acme_providers.extend(fragment.acme_providers);
    config
        .http_after_response_rules
        .extend(fragment.http_after_response_rules);
    Ok(())
}

/// Load a configuration from a file or a directory of fragments.
pub fn load(path: impl AsRef<Path>) -> Result<Configuration, DpapiError> {
    let path = path.as_ref();
    let config = if path.is_dir() {
        from_dir(path)?
    } else {
        from_file(path)?
    };
    info!(
        "Loaded {:?}: {} defaults, {} backends, {} acme providers, {} rules",
        path,
        config.defaults.len(),
        config.backends.len(),
        config.acme_providers.len(),
        config.http_after_response_rules.len()
    );
    Ok(config)
}

/// Serialize `value` for display.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, DpapiError> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::Yaml => {
            serde_yaml_ng::to_string(value).map_err(|e| DpapiError::CodecError(e.to_string()))
        }
    }
}
