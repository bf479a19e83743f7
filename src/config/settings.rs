//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Largest generation count accepted for a single multi-step request
    pub max_iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that relative save names resolve against
    pub save_directory: PathBuf,
    pub pretty_json: bool,
    /// Print a "Generation N:" header before each grid dump
    pub show_generation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { max_iterations: 10_000 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_directory: PathBuf::from("."),
            pretty_json: false,
            show_generation: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, or `None` if there is no file there
    pub fn from_file_if_exists(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Self::from_file(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_iterations == 0 {
            anyhow::bail!("Maximum iterations must be positive");
        }

        self.log_level()?;
        Ok(())
    }

    /// Parsed tracing level
    pub fn log_level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(&self.logging.level)
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", self.logging.level))
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref save_dir) = cli_overrides.save_directory {
            self.output.save_directory = save_dir.clone();
        }
        if let Some(pretty) = cli_overrides.pretty_json {
            self.output.pretty_json = pretty;
        }
        if cli_overrides.verbose {
            self.logging.level = "debug".to_string();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub save_directory: Option<PathBuf>,
    pub pretty_json: Option<bool>,
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.log_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.max_iterations = 42;
        settings.output.show_generation = true;
        settings.to_file(&path).unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("partial.yaml");
        std::fs::write(&path, "output:\n  pretty_json: true\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert!(settings.output.pretty_json);
        assert_eq!(settings.simulation.max_iterations, 10_000);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_validation() {
        let mut settings = Settings::default();
        settings.simulation.max_iterations = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.logging.level = "chatty".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_reported_as_absent() {
        let temp_dir = tempdir().unwrap();
        assert_eq!(Settings::from_file_if_exists(&temp_dir.path().join("absent.yaml")).unwrap(), None);

        let path = temp_dir.path().join("present.yaml");
        Settings::default().to_file(&path).unwrap();
        assert_eq!(Settings::from_file_if_exists(&path).unwrap(), Some(Settings::default()));
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            save_directory: Some(PathBuf::from("saves")),
            pretty_json: None,
            verbose: true,
        });

        assert_eq!(settings.output.save_directory, PathBuf::from("saves"));
        assert!(!settings.output.pretty_json);
        assert_eq!(settings.log_level().unwrap(), tracing::Level::DEBUG);
    }
}
