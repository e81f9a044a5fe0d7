//! Character - The record every rule operates on

use crate::config::CarryConstants;
use crate::error::{RulesError, RulesResult};
use crate::inventory::{Item, Loadout};
use crate::resources::{
    can_spend, clamp_stats, max_carry_capacity_with, pe_limit_for_nex, CharacterStats,
    ClassTable, ResourceCaps,
};
use crate::types::{Attributes, Condition, Rank};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete rules state for a character, as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Class id in the class table
    pub class: String,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub stats: CharacterStats,
    #[serde(default)]
    pub conditions: BTreeSet<Condition>,
    /// Rounds spent DYING so far
    #[serde(default)]
    pub dying_rounds: u32,
    #[serde(default)]
    pub is_dead: bool,
    /// PE spent since the last processed turn
    #[serde(default)]
    pub pe_spent_this_turn: u32,
    #[serde(default)]
    pub loadout: Loadout,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>, class: impl Into<String>) -> Self {
        Character {
            id: id.into(),
            name: name.into(),
            class: class.into(),
            rank: Rank::default(),
            attributes: Attributes::default(),
            stats: CharacterStats::default(),
            conditions: BTreeSet::new(),
            dying_rounds: 0,
            is_dead: false,
            pe_spent_this_turn: 0,
            loadout: Loadout::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_nex(mut self, nex: u32) -> Self {
        self.stats.nex = nex;
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.insert(condition);
        self
    }

    /// Fill every pool to the caps of the character's class
    pub fn with_full_stats(mut self, classes: &ClassTable) -> RulesResult<Self> {
        let caps = self.caps(classes)?;
        self.stats = CharacterStats::full(&caps, self.stats.nex);
        Ok(self)
    }

    pub fn nex(&self) -> u32 {
        self.stats.nex
    }

    pub fn has(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }

    /// Whether any condition stops the character from acting
    pub fn can_act(&self) -> bool {
        !self.is_dead && !self.conditions.iter().any(|c| c.prevents_action())
    }

    /// Caps for the character's class, attributes and NEX
    pub fn caps(&self, classes: &ClassTable) -> RulesResult<ResourceCaps> {
        classes.caps_for(&self.class, &self.attributes, self.stats.nex)
    }

    /// Recompute caps and clamp current pools into them
    pub fn recompute(&mut self, classes: &ClassTable) -> RulesResult<ResourceCaps> {
        let caps = self.caps(classes)?;
        self.stats = clamp_stats(Some(&self.stats), &caps);
        Ok(caps)
    }

    /// Change NEX and re-clamp pools
    pub fn set_nex(&mut self, nex: u32, classes: &ClassTable) -> RulesResult<ResourceCaps> {
        self.stats.nex = nex;
        self.recompute(classes)
    }

    pub fn pe_limit(&self) -> u32 {
        pe_limit_for_nex(self.stats.nex)
    }

    /// Spend PE, honouring both the pool and the per-turn limit
    pub fn spend_pe(&mut self, cost: u32) -> RulesResult<()> {
        if self.is_dead {
            return Err(RulesError::precondition(format!("{} is dead", self.name)));
        }
        if !self.can_act() {
            return Err(RulesError::precondition(format!("{} cannot act", self.name)));
        }
        let limit = self.pe_limit();
        if !can_spend(cost, self.pe_spent_this_turn, limit) {
            return Err(RulesError::precondition(format!(
                "PE limit per turn is {} at NEX {}%, already spent {}",
                limit, self.stats.nex, self.pe_spent_this_turn
            )));
        }
        self.stats.pe.try_spend(cost)?;
        self.pe_spent_this_turn += cost;
        Ok(())
    }

    pub fn carry_capacity(&self, constants: &CarryConstants) -> i32 {
        max_carry_capacity_with(self.attributes.strength, constants)
    }

    pub fn is_overloaded(&self, constants: &CarryConstants) -> bool {
        self.loadout.is_overloaded(self.carry_capacity(constants))
    }

    /// Add an item if the character's rank allows it
    pub fn equip(&mut self, item: Item) -> RulesResult<()> {
        self.loadout.try_add(self.rank, item)
    }
}
