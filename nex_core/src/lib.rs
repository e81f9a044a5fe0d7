//! nex_core - Rules engine for NEX-based tabletop campaigns
//!
//! This library provides:
//! - Dice: formula parsing and evaluation against an injected RNG
//! - Resources: PV/SAN/PE caps and Defense from class, attributes and NEX
//! - Turn: per-turn DYING/UNCONSCIOUS/BLEEDING transitions and the stop-bleeding check
//! - Inventory: rank-gated item categories, carry capacity and PE-per-turn limits
//!
//! Every operation is a pure, synchronous computation. Persistence and
//! transport belong to the caller.

pub mod character;
pub mod config;
pub mod dice;
pub mod error;
pub mod inventory;
pub mod prelude;
pub mod resources;
pub mod turn;
pub mod types;

// Re-export core types for convenience
pub use character::Character;
pub use config::{default_classes, RuleConstants, RulesConfig};
pub use dice::{evaluate, parse, roll, DiceFormula, RollResult, ScriptedRolls, Term, UnitSource};
pub use error::{RulesError, RulesResult};
pub use inventory::{can_equip, Item, Loadout, RANK_CATEGORY_PERMISSIONS};
pub use resources::{
    can_spend, clamp_stats, compute_caps, compute_caps_or_default, is_overloaded,
    max_carry_capacity, pe_limit_for_nex, CharacterStats, ClassConfig, ClassTable, ResourceCaps,
    ResourcePool,
};
pub use turn::{process_turn, stop_bleeding, BleedCheck, TurnOutcome};
pub use types::{Attributes, Condition, ItemCategory, Rank};
