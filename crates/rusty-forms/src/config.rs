// File: src/config.rs
// Purpose: Configuration parsing from rusty-forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Validation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Turn a panicking custom validator into a field error instead of
    /// unwinding into the caller
    #[serde(default = "default_true")]
    pub catch_validator_panics: bool,

    /// Message recorded for a field whose validator panicked; `{field}` is
    /// replaced with the field name
    #[serde(default = "default_failure_message")]
    pub validator_failure_message: String,
}

/// Report rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `field: message` line per error
    #[default]
    Text,
    /// A JSON object of field to message
    Json,
}

// Default values
fn default_true() -> bool {
    true
}

fn default_failure_message() -> String {
    "{field} could not be validated".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catch_validator_panics: true,
            validator_failure_message: default_failure_message(),
        }
    }
}

impl EngineConfig {
    pub fn failure_message(&self, field: &str) -> String {
        self.validator_failure_message.replace("{field}", field)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{}` (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl Config {
    /// Load configuration from rusty-forms.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rusty-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-forms.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.engine.catch_validator_panics);
        assert_eq!(
            config.engine.failure_message("email"),
            "email could not be validated"
        );
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert!(config.engine.catch_validator_panics);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [engine]
            catch_validator_panics = false

            [output]
            format = "json"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.engine.catch_validator_panics);
        assert_eq!(
            config.engine.validator_failure_message,
            "{field} could not be validated"
        );
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("rusty-forms.toml")).unwrap();
        assert!(config.engine.catch_validator_panics);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine]").unwrap();
        writeln!(file, "validator_failure_message = \"Check {{field}} again\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.engine.failure_message("date"), "Check date again");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
