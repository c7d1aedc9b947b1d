use dpapi_config::{ChangeSet, OutputFormat, RuntimeConfig, load, render};
use dpapi_error::DpapiError;
use dpapi_models::{CompareOptions, Validate};
use std::path::Path;
use tracing::info;

/// Load and validate a configuration
///
/// # Arguments
///
/// * `path` - Document or directory to validate
///
/// # Returns
///
/// * `Result<String, DpapiError>` - A summary line, or every failing field
pub fn handle_validate(path: &Path) -> Result<String, DpapiError> {
    let config = load(path)?;
    config.validate()?;
    let sections = config.defaults.len()
        + config.backends.len()
        + config.acme_providers.len()
        + usize::from(config.global.is_some());
    info!("{:?} is valid", path);
    Ok(format!(
        "{}: valid ({} sections, {} rules)",
        path.display(),
        sections,
        config.http_after_response_rules.len()
    ))
}

/// Render the change set between two configurations
///
/// # Arguments
///
/// * `old` - Configuration before the change
/// * `new` - Configuration after the change
/// * `strict` - Turn off `nil_same_as_empty` regardless of the settings
/// * `format` - Output format, the settings' one when `None`
/// * `settings` - Runtime settings
pub fn handle_diff(
    old: &Path,
    new: &Path,
    strict: bool,
    format: Option<OutputFormat>,
    settings: &RuntimeConfig,
) -> Result<String, DpapiError> {
    let opts = if strict {
        CompareOptions::strict()
    } else {
        settings.compare_options()
    };
    let set = ChangeSet::between(&load(old)?, &load(new)?, &opts);
    info!("{} section changes", set.len());
    render(&set, format.unwrap_or(settings.output), settings.pretty)
}

/// Render a configuration in normalized form.
pub fn handle_show(
    path: &Path,
    format: Option<OutputFormat>,
    settings: &RuntimeConfig,
) -> Result<String, DpapiError> {
    let config = load(path)?;
    render(&config, format.unwrap_or(settings.output), settings.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dpapi-command-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join(name);
        std::fs::write(&file, content).unwrap();
        file
    }

    #[test]
    fn test_validate_summary() {
        let file = write(
            "valid.yaml",
            "global:\n  daemon: true\nbackends:\n  - name: be_api\n  - name: be_static\n",
        );
        let summary = handle_validate(&file).unwrap();
        assert!(summary.ends_with("valid (3 sections, 0 rules)"));
    }

    #[test]
    fn test_validate_failure() {
        let file = write(
            "invalid.yaml",
            "backends:\n  - name: \"be api\"\n  - name: be_web\n    retries: -1\n",
        );
        let err = handle_validate(&file).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("backends[be api].name"));
        assert!(message.contains("backends[be_web].retries"));
        match err {
            DpapiError::ValidationError(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_diff_strict_flag() {
        let old = write("old.json", r#"{"backends": [{"name": "be_api"}]}"#);
        let new = write(
            "new.json",
            r#"{"backends": [{"name": "be_api", "redispatch": {}}]}"#,
        );
        let settings = RuntimeConfig {
            pretty: false,
            ..Default::default()
        };

        let out = handle_diff(&old, &new, false, None, &settings).unwrap();
        assert_eq!(out, "[]");

        let out = handle_diff(&old, &new, true, None, &settings).unwrap();
        assert!(out.contains(r#""action":"changed""#));
        assert!(out.contains("redispatch"));
    }

    #[test]
    fn test_show_uses_requested_format() {
        let file = write("show.json", r#"{"backends": [{"name": "be_api"}]}"#);
        let settings = RuntimeConfig::default();
        let yaml = handle_show(&file, Some(OutputFormat::Yaml), &settings).unwrap();
        assert!(yaml.contains("- name: be_api"));
        let json = handle_show(&file, None, &settings).unwrap();
        assert!(json.starts_with("{\n"));
    }
}
