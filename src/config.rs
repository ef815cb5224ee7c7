//! Configuration management for taskpilot
//!
//! TOML-based configuration with per-field defaults and validation.
//! Location: ~/.taskpilot/config.toml

use crate::agent::learning::LearningRates;
use crate::errors::{AgentError, Result as AgentResult};
use crate::planning::PlanDefaults;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub agent: AgentSection,
    pub learning: LearningRates,
    pub planning: PlanDefaults,
    pub memory: MemorySection,
    pub logging: LoggingSection,
}

/// Agent identity and starting confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSection {
    pub name: String,
    pub personality: String,
    pub initial_confidence: f64,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            name: "TaskPilot".to_string(),
            personality: "helpful and methodical".to_string(),
            initial_confidence: 0.5,
        }
    }
}

/// Memory limits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySection {
    /// Episodic history cap; unbounded when absent
    pub max_episodes: Option<usize>,
}

/// Log filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the standard location, creating a default
    /// file if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".taskpilot").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> AgentResult<()> {
        check_unit("agent.initial_confidence", self.agent.initial_confidence)?;
        check_unit(
            "learning.confidence_increment",
            self.learning.confidence_increment,
        )?;
        check_unit(
            "learning.confidence_decrement",
            self.learning.confidence_decrement,
        )?;

        if self.memory.max_episodes == Some(0) {
            return Err(AgentError::ConfigError(
                "memory.max_episodes must be at least 1; omit it for unbounded history"
                    .to_string(),
            ));
        }

        if self.agent.name.trim().is_empty() {
            return Err(AgentError::ConfigError(
                "agent.name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> AgentResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AgentError::ConfigError(format!(
            "{} must be between 0.0 and 1.0, got {}",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.agent.initial_confidence, 0.5);
        assert_eq!(config.learning.confidence_increment, 0.1);
        assert_eq!(config.learning.confidence_decrement, 0.05);
        assert_eq!(config.planning.estimated_time, "5-15 minutes");
        assert!(config.memory.max_episodes.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [agent]
            name = "Scout"

            [planning]
            risk_level = "high"
            "#,
        )
        .unwrap();

        assert_eq!(config.agent.name, "Scout");
        assert_eq!(config.agent.initial_confidence, 0.5);
        assert_eq!(config.planning.risk_level, RiskLevel::High);
        assert_eq!(
            config.planning.resources_needed,
            vec!["basic access".to_string(), "basic tools".to_string()]
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = Config::default();
        config.agent.initial_confidence = 1.5;
        assert!(matches!(
            config.validate(),
            Err(AgentError::ConfigError(_))
        ));

        let mut config = Config::default();
        config.learning.confidence_decrement = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_episode_cap() {
        let mut config = Config::default();
        config.memory.max_episodes = Some(0);
        assert!(matches!(
            config.validate(),
            Err(AgentError::ConfigError(_))
        ));

        config.memory.max_episodes = Some(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.agent.personality = "curious".to_string();
        config.memory.max_episodes = Some(25);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[agent]\ninitial_confidence = 3.0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
