//! Resource caps, PE limits and equipment permissions

use anyhow::{Context, Result};
use clap::Parser;
use nex_core::inventory::{category_limit, UNLIMITED};
use nex_core::{can_equip, can_spend, pe_limit_for_nex, Attributes, ItemCategory, Rank, ResourceCaps};
use serde::Serialize;

use super::{print_json, Rules};

/// Show caps for a class at a NEX
#[derive(Parser)]
pub struct Caps {
    /// Class id, e.g. combatente
    #[arg(short, long, value_name = "CLASS")]
    class: String,

    /// NEX percentage (0-99)
    #[arg(short, long, value_name = "N")]
    nex: u32,

    /// Agility, added to base Defense
    #[arg(short, long, value_name = "A", default_value_t = 0, allow_hyphen_values = true)]
    agility: i32,
}

#[derive(Debug, Serialize)]
struct CapsReport<'a> {
    class: &'a str,
    nex: u32,
    #[serde(flatten)]
    caps: ResourceCaps,
    pe_per_turn: u32,
}

impl Caps {
    pub fn execute(self, rules: &Rules) -> Result<()> {
        let attributes = Attributes {
            agility: self.agility,
            ..Default::default()
        };
        let caps = rules
            .classes
            .caps_for(&self.class, &attributes, self.nex)
            .with_context(|| format!("Known classes: {}", rules.classes.ids().join(", ")))?;

        print_json(&CapsReport {
            class: &self.class,
            nex: self.nex,
            caps,
            pe_per_turn: pe_limit_for_nex(self.nex),
        })
    }
}

/// Show the PE-per-turn limit for a NEX
#[derive(Parser)]
pub struct PeLimit {
    /// NEX percentage (0-99)
    #[arg(value_name = "NEX")]
    nex: u32,

    /// PE already spent this turn
    #[arg(short, long, value_name = "S", requires = "cost")]
    spent: Option<u32>,

    /// PE cost of the next action
    #[arg(short, long, value_name = "C", requires = "spent")]
    cost: Option<u32>,
}

#[derive(Debug, Serialize, PartialEq)]
struct PeLimitReport {
    nex: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    can_spend: Option<bool>,
}

impl PeLimit {
    pub fn execute(self) -> Result<()> {
        print_json(&self.report())
    }

    fn report(&self) -> PeLimitReport {
        let limit = pe_limit_for_nex(self.nex);
        PeLimitReport {
            nex: self.nex,
            limit,
            can_spend: self
                .spent
                .zip(self.cost)
                .map(|(spent, cost)| can_spend(cost, spent, limit)),
        }
    }
}

/// Check a rank's permission for one more item of a category
#[derive(Parser)]
pub struct CanEquip {
    /// Rank name (recruit, operator, special_agent, ...) or 0-4
    #[arg(short, long, value_name = "RANK")]
    rank: Rank,

    /// Item category: 0-4 or I-IV
    #[arg(short = 'g', long, value_name = "CAT")]
    category: ItemCategory,

    /// Items of that category already carried
    #[arg(short = 'n', long, value_name = "N")]
    count: u32,
}

#[derive(Debug, Serialize, PartialEq)]
struct CanEquipReport {
    rank: Rank,
    category: ItemCategory,
    count: u32,
    /// Absent when the category has no limit
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    allowed: bool,
}

impl CanEquip {
    pub fn execute(self) -> Result<()> {
        print_json(&self.report())
    }

    fn report(&self) -> CanEquipReport {
        let limit = category_limit(self.rank, self.category);
        CanEquipReport {
            rank: self.rank,
            category: self.category,
            count: self.count,
            limit: (limit != UNLIMITED).then_some(limit),
            allowed: can_equip(self.rank, self.category, self.count),
        }
    }
}
