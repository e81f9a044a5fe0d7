//! Core types shared by the rules engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five character attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub agility: i32,
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub intellect: i32,
    #[serde(default)]
    pub presence: i32,
    #[serde(default)]
    pub vigor: i32,
}

impl Attributes {
    /// Create attributes in agility, strength, intellect, presence, vigor order
    pub fn new(agility: i32, strength: i32, intellect: i32, presence: i32, vigor: i32) -> Self {
        Attributes {
            agility,
            strength,
            intellect,
            presence,
            vigor,
        }
    }
}

/// Condition tags that can be attached to a character
///
/// Serialized with the uppercase identifiers used by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    Bleeding,
    Dying,
    Unconscious,
    Vulnerable,
    Shaken,
    Frightened,
    Stunned,
    Prone,
    Blinded,
    Paralyzed,
    Fatigued,
    Exhausted,
}

impl Condition {
    /// Get all conditions
    pub fn all() -> &'static [Condition] {
        &[
            Condition::Bleeding,
            Condition::Dying,
            Condition::Unconscious,
            Condition::Vulnerable,
            Condition::Shaken,
            Condition::Frightened,
            Condition::Stunned,
            Condition::Prone,
            Condition::Blinded,
            Condition::Paralyzed,
            Condition::Fatigued,
            Condition::Exhausted,
        ]
    }

    /// External string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Bleeding => "BLEEDING",
            Condition::Dying => "DYING",
            Condition::Unconscious => "UNCONSCIOUS",
            Condition::Vulnerable => "VULNERABLE",
            Condition::Shaken => "SHAKEN",
            Condition::Frightened => "FRIGHTENED",
            Condition::Stunned => "STUNNED",
            Condition::Prone => "PRONE",
            Condition::Blinded => "BLINDED",
            Condition::Paralyzed => "PARALYZED",
            Condition::Fatigued => "FATIGUED",
            Condition::Exhausted => "EXHAUSTED",
        }
    }

    /// Whether this condition stops the character from acting
    pub fn prevents_action(&self) -> bool {
        matches!(
            self,
            Condition::Unconscious | Condition::Paralyzed | Condition::Stunned
        )
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Condition::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown condition: {}", s))
    }
}

/// Character rank, gating how many items of each category can be carried
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    #[default]
    Recruit,
    Operator,
    SpecialAgent,
    OperationsOfficer,
    EliteAgent,
}

impl Rank {
    /// Get all ranks, lowest first
    pub fn all() -> &'static [Rank] {
        &[
            Rank::Recruit,
            Rank::Operator,
            Rank::SpecialAgent,
            Rank::OperationsOfficer,
            Rank::EliteAgent,
        ]
    }

    /// Table index (0-4)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Rank> {
        Rank::all().get(index).copied()
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "recruit" | "0" => Ok(Rank::Recruit),
            "operator" | "1" => Ok(Rank::Operator),
            "special_agent" | "2" => Ok(Rank::SpecialAgent),
            "operations_officer" | "3" => Ok(Rank::OperationsOfficer),
            "elite_agent" | "4" => Ok(Rank::EliteAgent),
            _ => Err(format!("Unknown rank: {}", s)),
        }
    }
}

/// Equipment category (0-IV)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItemCategory {
    Zero,
    I,
    II,
    III,
    IV,
}

impl ItemCategory {
    pub fn all() -> &'static [ItemCategory] {
        &[
            ItemCategory::Zero,
            ItemCategory::I,
            ItemCategory::II,
            ItemCategory::III,
            ItemCategory::IV,
        ]
    }

    /// Table index (0-4)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<u8> for ItemCategory {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ItemCategory::all()
            .get(value as usize)
            .copied()
            .ok_or_else(|| format!("Item category out of range: {}", value))
    }
}

impl From<ItemCategory> for u8 {
    fn from(category: ItemCategory) -> Self {
        category as u8
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "0" => Ok(ItemCategory::Zero),
            "1" | "I" => Ok(ItemCategory::I),
            "2" | "II" => Ok(ItemCategory::II),
            "3" | "III" => Ok(ItemCategory::III),
            "4" | "IV" => Ok(ItemCategory::IV),
            _ => Err(format!("Unknown item category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_serializes_to_external_tag() {
        let json = serde_json::to_string(&Condition::Bleeding).unwrap();
        assert_eq!(json, "\"BLEEDING\"");

        let parsed: Condition = serde_json::from_str("\"UNCONSCIOUS\"").unwrap();
        assert_eq!(parsed, Condition::Unconscious);
    }

    #[test]
    fn test_condition_from_str_is_case_insensitive() {
        assert_eq!("dying".parse::<Condition>(), Ok(Condition::Dying));
        assert_eq!(" Vulnerable ".parse::<Condition>(), Ok(Condition::Vulnerable));
        assert!("ON_FIRE".parse::<Condition>().is_err());
    }

    #[test]
    fn test_rank_parse_and_index() {
        assert_eq!("special agent".parse::<Rank>(), Ok(Rank::SpecialAgent));
        assert_eq!("4".parse::<Rank>(), Ok(Rank::EliteAgent));
        assert_eq!(Rank::OperationsOfficer.index(), 3);
        assert_eq!(Rank::from_index(1), Some(Rank::Operator));
        assert_eq!(Rank::from_index(5), None);
    }

    #[test]
    fn test_item_category_roundtrips_as_number() {
        let json = serde_json::to_string(&ItemCategory::III).unwrap();
        assert_eq!(json, "3");
        assert!(serde_json::from_str::<ItemCategory>("7").is_err());
        assert_eq!("ii".parse::<ItemCategory>(), Ok(ItemCategory::II));
    }
}
