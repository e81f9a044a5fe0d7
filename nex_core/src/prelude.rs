//! Prelude module for convenient imports
//!
//! ```rust
//! use nex_core::prelude::*;
//! ```

// Core types
pub use crate::character::Character;
pub use crate::types::{Attributes, Condition, ItemCategory, Rank};
pub use crate::error::{RulesError, RulesResult};

// Dice
pub use crate::dice::{evaluate, parse, roll, DiceFormula, RollResult, ScriptedRolls, UnitSource};

// Resources
pub use crate::resources::{clamp_stats, compute_caps, CharacterStats, ClassTable, ResourceCaps};

// Turns
pub use crate::turn::{process_turn, stop_bleeding, TurnOutcome};

// Config
pub use crate::config::{default_classes, RulesConfig};
