//! Tunable rule constants

use super::ConfigError;
use crate::dice::MAX_SIDES;
use serde::{Deserialize, Serialize};

/// Rule constants that a table may want to tweak
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConstants {
    #[serde(default)]
    pub turn: TurnConstants,
    #[serde(default)]
    pub bleeding: BleedingConstants,
    #[serde(default)]
    pub carry: CarryConstants,
}

impl RuleConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn.dying_rounds_to_death == 0 {
            return Err(ConfigError::ValidationError(
                "turn.dying_rounds_to_death must be at least 1".to_string(),
            ));
        }
        if self.bleeding.check_die == 0 || self.bleeding.check_die > MAX_SIDES {
            return Err(ConfigError::ValidationError(format!(
                "bleeding.check_die must be between 1 and {}",
                MAX_SIDES
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnConstants {
    /// Rounds spent DYING before the character dies
    #[serde(default = "default_dying_rounds")]
    pub dying_rounds_to_death: u32,
}

impl Default for TurnConstants {
    fn default() -> Self {
        TurnConstants {
            dying_rounds_to_death: default_dying_rounds(),
        }
    }
}

fn default_dying_rounds() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BleedingConstants {
    /// Difficulty of the Vigor check to stop bleeding (total must reach it)
    #[serde(default = "default_check_dt")]
    pub check_dt: i64,
    /// Die rolled for the check, with Vigor added as a bonus
    #[serde(default = "default_check_die")]
    pub check_die: u32,
}

impl Default for BleedingConstants {
    fn default() -> Self {
        BleedingConstants {
            check_dt: default_check_dt(),
            check_die: default_check_die(),
        }
    }
}

fn default_check_dt() -> i64 {
    20
}
fn default_check_die() -> u32 {
    20
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryConstants {
    /// Capacity granted per point of Strength
    #[serde(default = "default_per_strength")]
    pub per_strength: i32,
    /// Capacity floor for low Strength
    #[serde(default = "default_minimum")]
    pub minimum: i32,
}

impl Default for CarryConstants {
    fn default() -> Self {
        CarryConstants {
            per_strength: default_per_strength(),
            minimum: default_minimum(),
        }
    }
}

fn default_per_strength() -> i32 {
    5
}
fn default_minimum() -> i32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = RuleConstants::default();
        assert_eq!(constants.turn.dying_rounds_to_death, 3);
        assert_eq!(constants.bleeding.check_dt, 20);
        assert_eq!(constants.bleeding.check_die, 20);
        assert_eq!(constants.carry.per_strength, 5);
        assert_eq!(constants.carry.minimum, 2);
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[turn]
dying_rounds_to_death = 4

[carry]
per_strength = 6
"#;

        let constants: RuleConstants = toml::from_str(toml).unwrap();
        assert_eq!(constants.turn.dying_rounds_to_death, 4);
        assert_eq!(constants.carry.per_strength, 6);
        assert_eq!(constants.carry.minimum, 2);
        assert_eq!(constants.bleeding, BleedingConstants::default());
    }

    #[test]
    fn test_check_die_bounds() {
        let mut constants = RuleConstants::default();
        constants.bleeding.check_die = 0;
        assert!(constants.validate().is_err());
        constants.bleeding.check_die = MAX_SIDES + 1;
        assert!(constants.validate().is_err());
        constants.bleeding.check_die = MAX_SIDES;
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_zero_dying_rounds_rejected() {
        let mut constants = RuleConstants::default();
        constants.turn.dying_rounds_to_death = 0;
        assert!(constants.validate().is_err());
    }
}
