//! Configuration file support for swapi-explorer.
//!
//! Provides YAML-based configuration through `swapi-explorer.config.yml`
//! files, and the resolution of the effective settings from CLI flags,
//! the config file and built-in defaults (in that order).

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::adapters::outbound::network::DEFAULT_BASE_URL;
use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "swapi-explorer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub format: Option<String>,
    pub session_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
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
    if let Some(ref base_url) = config.base_url {
        validate_base_url(base_url)?;
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be at least 1.\n\n\
             💡 Hint: Remove timeout_secs to wait for responses without a limit."
        );
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Base URLs must be non-empty http(s) URLs.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        bail!(
            "Invalid base URL: must not be empty.\n\n\
             💡 Hint: Use the catalog root, e.g. \"{}\".",
            DEFAULT_BASE_URL
        );
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        bail!(
            "Invalid base URL: {}\n\n\
             💡 Hint: The base URL must start with http:// or https://.",
            trimmed
        );
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

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub format: Option<OutputFormat>,
    pub session_file: Option<PathBuf>,
}

/// Effective settings after merging CLI flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub base_url: String,
    pub format: OutputFormat,
    /// `None` means the platform default location
    pub session_file: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            format: OutputFormat::default(),
            session_file: None,
            timeout: None,
        }
    }
}

impl AppSettings {
    /// CLI flag > config file > built-in default
    pub fn resolve(config: Option<&ConfigFile>, overrides: SettingsOverrides) -> Result<Self> {
        let defaults = Self::default();

        let base_url = match overrides.base_url {
            Some(base_url) => {
                validate_base_url(&base_url)?;
                base_url
            }
            None => config
                .and_then(|c| c.base_url.clone())
                .unwrap_or(defaults.base_url),
        };

        let format = match overrides.format {
            Some(format) => format,
            None => match config.and_then(|c| c.format.as_deref()) {
                Some(format) => OutputFormat::from_str(format).map_err(anyhow::Error::msg)?,
                None => defaults.format,
            },
        };

        Ok(Self {
            base_url: base_url.trim().to_string(),
            format,
            session_file: overrides
                .session_file
                .or_else(|| config.and_then(|c| c.session_file.clone())),
            timeout: config
                .and_then(|c| c.timeout_secs)
                .map(Duration::from_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
base_url: "http://localhost:8080/api"
format: json
session_file: /tmp/swapi-session.json
timeout_secs: 15
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(
            config.session_file,
            Some(PathBuf::from("/tmp/swapi-session.json"))
        );
        assert_eq!(config.timeout_secs, Some(15));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: text\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("text"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_page_size_is_not_a_config_field() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "page_size: 5\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("page_size"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "timeout_secs: 0\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("timeout_secs must be at least 1"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "base_url: \"ftp://swapi.dev/api\"\n");
        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must start with http:// or https://"));

        let config_path = write_config(&dir, "base_url: \"  \"\n");
        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must not be empty"));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: markdown\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format: markdown"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
unknown_field: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = AppSettings::resolve(None, SettingsOverrides::default()).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.base_url, "https://swapi.dev/api");
        assert!(settings.timeout.is_none());
    }

    #[test]
    fn test_resolve_config_over_defaults() {
        let config = ConfigFile {
            base_url: Some("http://localhost:9000/api".to_string()),
            format: Some("json".to_string()),
            timeout_secs: Some(3),
            ..Default::default()
        };

        let settings = AppSettings::resolve(Some(&config), SettingsOverrides::default()).unwrap();

        assert_eq!(settings.base_url, "http://localhost:9000/api");
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_resolve_cli_over_config() {
        let config = ConfigFile {
            base_url: Some("http://localhost:9000/api".to_string()),
            format: Some("json".to_string()),
            session_file: Some(PathBuf::from("/from/config.json")),
            ..Default::default()
        };
        let overrides = SettingsOverrides {
            base_url: Some("http://127.0.0.1:1234/api".to_string()),
            format: Some(OutputFormat::Text),
            session_file: Some(PathBuf::from("/from/cli.json")),
        };

        let settings = AppSettings::resolve(Some(&config), overrides).unwrap();

        assert_eq!(settings.base_url, "http://127.0.0.1:1234/api");
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.session_file, Some(PathBuf::from("/from/cli.json")));
    }

    #[test]
    fn test_resolve_rejects_bad_cli_base_url() {
        let overrides = SettingsOverrides {
            base_url: Some("swapi.dev".to_string()),
            ..Default::default()
        };
        assert!(AppSettings::resolve(None, overrides).is_err());
    }
}
