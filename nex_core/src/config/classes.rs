//! Class table loading

use super::ConfigError;
use crate::resources::{ClassConfig, ClassTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for class configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassesConfig {
    #[serde(rename = "classes")]
    pub classes: Vec<ClassConfig>,
}

/// Load class configurations from a TOML file
pub fn load_class_configs(path: &Path) -> Result<ClassTable, ConfigError> {
    let config: ClassesConfig = super::load_toml(path)?;
    Ok(into_table(config))
}

/// Load class configurations from a TOML string
pub fn parse_class_configs(content: &str) -> Result<ClassTable, ConfigError> {
    let config: ClassesConfig = super::parse_toml(content)?;
    Ok(into_table(config))
}

fn into_table(config: ClassesConfig) -> ClassTable {
    let mut table = ClassTable::new();
    for class in config.classes {
        table.register(class);
    }
    table
}

/// Get the built-in class table
pub fn default_classes() -> ClassTable {
    let toml = include_str!("../../config/classes.toml");
    parse_class_configs(toml).unwrap_or_else(|_| ClassTable::with_defaults())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classes() {
        let toml = r#"
[[classes]]
id = "mundano"
name = "Mundano"
pv_initial = 8
pv_per_nex = 2
san_initial = 8
san_per_nex = 2
pe_initial = 1
pe_per_nex = 1
"#;

        let table = parse_class_configs(toml).unwrap();
        let mundano = table.get("mundano").unwrap();
        assert_eq!(mundano.name, "Mundano");
        assert_eq!(mundano.pv_per_nex, 2);
    }

    #[test]
    fn test_default_classes_match_builtin_table() {
        let from_file = default_classes();
        let builtin = ClassTable::with_defaults();

        assert_eq!(from_file.len(), 3, "Expected 3 classes from config");
        for id in ["combatente", "especialista", "ocultista"] {
            assert_eq!(from_file.get(id), builtin.get(id), "Mismatch for class: {}", id);
        }
    }
}
