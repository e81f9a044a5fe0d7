//! Configuration loading from TOML files

mod classes;
mod constants;

pub use classes::{default_classes, load_class_configs, parse_class_configs};
pub use constants::{BleedingConstants, CarryConstants, RuleConstants, TurnConstants};

use crate::resources::{ClassConfig, ClassTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Complete rule configuration: tunable constants plus the class table
///
/// Classes listed in a file replace the built-in entry with the same id;
/// the remaining built-in classes stay available.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub constants: RuleConstants,
    #[serde(default)]
    pub classes: Vec<ClassConfig>,
}

impl RulesConfig {
    /// Check values the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constants.validate()?;
        for (i, class) in self.classes.iter().enumerate() {
            if class.id.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "class #{} has an empty id",
                    i + 1
                )));
            }
            if self.classes[..i].iter().any(|c| c.id == class.id) {
                return Err(ConfigError::ValidationError(format!(
                    "class '{}' is defined twice",
                    class.id
                )));
            }
        }
        Ok(())
    }

    /// Built-in classes overlaid with the classes from this config
    pub fn class_table(&self) -> ClassTable {
        let mut table = default_classes();
        for class in &self.classes {
            table.register(class.clone());
        }
        table
    }
}

/// Load and validate a rules file
pub fn load_rules_config(path: &Path) -> Result<RulesConfig, ConfigError> {
    let config: RulesConfig = load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate rules from a TOML string
pub fn parse_rules_config(content: &str) -> Result<RulesConfig, ConfigError> {
    let config: RulesConfig = parse_toml(content)?;
    config.validate()?;
    Ok(config)
}
