//! Class resource tables

use super::{compute_caps, ResourceCaps};
use crate::error::{RulesError, RulesResult};
use crate::types::Attributes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base resource pools of a character class
///
/// Each pool grows by its `*_per_nex` value every 5 NEX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConfig {
    /// Unique identifier (e.g., "combatente")
    pub id: String,
    /// Display name
    pub name: String,
    pub pv_initial: u32,
    pub pv_per_nex: u32,
    pub san_initial: u32,
    pub san_per_nex: u32,
    pub pe_initial: u32,
    pub pe_per_nex: u32,
}

impl ClassConfig {
    /// Create a class config with pools in PV, SAN, PE order as (initial, per 5 NEX)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pv: (u32, u32),
        san: (u32, u32),
        pe: (u32, u32),
    ) -> Self {
        ClassConfig {
            id: id.into(),
            name: name.into(),
            pv_initial: pv.0,
            pv_per_nex: pv.1,
            san_initial: san.0,
            san_per_nex: san.1,
            pe_initial: pe.0,
            pe_per_nex: pe.1,
        }
    }
}

/// Class registry, keyed by class id
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    configs: HashMap<String, ClassConfig>,
}

impl ClassTable {
    /// Create a new empty table
    pub fn new() -> Self {
        ClassTable {
            configs: HashMap::new(),
        }
    }

    /// Register a class, replacing any class with the same id
    pub fn register(&mut self, config: ClassConfig) {
        self.configs.insert(config.id.clone(), config);
    }

    /// Get a class configuration by id
    pub fn get(&self, id: &str) -> Option<&ClassConfig> {
        self.configs.get(id)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Class ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.configs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Compute caps for a class id, refusing unknown classes
    pub fn caps_for(&self, id: &str, attributes: &Attributes, nex: u32) -> RulesResult<ResourceCaps> {
        let config = self
            .get(id)
            .ok_or_else(|| RulesError::precondition(format!("Unknown class '{}'", id)))?;
        Ok(compute_caps(config, attributes, nex))
    }

    /// Built-in classes
    pub fn with_defaults() -> Self {
        let mut table = Self::new();

        table.register(ClassConfig::new("combatente", "Combatente", (20, 4), (12, 3), (2, 2)));
        table.register(ClassConfig::new("especialista", "Especialista", (16, 3), (16, 4), (3, 3)));
        table.register(ClassConfig::new("ocultista", "Ocultista", (12, 2), (20, 5), (4, 4)));

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ClassTable::with_defaults();
        assert_eq!(table.len(), 3);
        assert_eq!(table.ids(), vec!["combatente", "especialista", "ocultista"]);
        assert_eq!(table.get("ocultista").unwrap().san_initial, 20);
    }

    #[test]
    fn test_caps_for_known_class() {
        let table = ClassTable::with_defaults();
        let attrs = Attributes { agility: 2, ..Default::default() };
        let caps = table.caps_for("combatente", &attrs, 10).unwrap();
        // 20 + 2 * 4
        assert_eq!(caps.pv_max, 28);
        assert_eq!(caps.defense, 12);
    }

    #[test]
    fn test_caps_for_unknown_class_is_precondition() {
        let table = ClassTable::with_defaults();
        let result = table.caps_for("bardo", &Attributes::default(), 5);
        assert!(matches!(result, Err(RulesError::Precondition(_))));
    }
}
