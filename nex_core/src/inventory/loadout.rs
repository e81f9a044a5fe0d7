//! Loadout - Items carried by a character

use super::{can_equip, category_limit};
use crate::error::{RulesError, RulesResult};
use crate::resources::is_overloaded;
use crate::types::{ItemCategory, Rank};
use serde::{Deserialize, Serialize};

/// A carried item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: ItemCategory,
    /// Space taken, in carry units
    #[serde(default)]
    pub weight: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, category: ItemCategory, weight: i32) -> Self {
        Item {
            name: name.into(),
            category,
            weight,
        }
    }
}

/// A category holding more items than the rank allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryViolation {
    pub category: ItemCategory,
    pub count: u32,
    pub limit: u32,
}

/// Items carried by a character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of carried items in a category
    pub fn category_count(&self, category: ItemCategory) -> u32 {
        self.items.iter().filter(|i| i.category == category).count() as u32
    }

    /// Summed weight, saturating at the `i32` bounds
    pub fn total_weight(&self) -> i32 {
        self.items
            .iter()
            .fold(0i32, |acc, item| acc.saturating_add(item.weight))
    }

    pub fn is_overloaded(&self, capacity: i32) -> bool {
        is_overloaded(self.total_weight(), capacity)
    }

    /// Add an item if the rank allows another one of its category
    pub fn try_add(&mut self, rank: Rank, item: Item) -> RulesResult<()> {
        let count = self.category_count(item.category);
        if !can_equip(rank, item.category, count) {
            return Err(RulesError::precondition(format!(
                "{:?} rank cannot carry another category {:?} item ({} of {})",
                rank,
                item.category,
                count,
                category_limit(rank, item.category)
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the first item with this name
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|i| i.name == name)?;
        Some(self.items.remove(index))
    }

    /// Categories that exceed what `rank` allows
    pub fn violations(&self, rank: Rank) -> Vec<CategoryViolation> {
        ItemCategory::all()
            .iter()
            .filter_map(|category| {
                let count = self.category_count(*category);
                let limit = category_limit(rank, *category);
                (count > limit).then_some(CategoryViolation {
                    category: *category,
                    count,
                    limit,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_add_respects_rank() {
        let mut loadout = Loadout::new();
        loadout.try_add(Rank::Recruit, Item::new("Pistola", ItemCategory::I, 1)).unwrap();
        loadout.try_add(Rank::Recruit, Item::new("Colete leve", ItemCategory::I, 2)).unwrap();

        let third = loadout.try_add(Rank::Recruit, Item::new("Faca", ItemCategory::I, 1));
        assert!(matches!(third, Err(RulesError::Precondition(_))));
        assert_eq!(loadout.items.len(), 2);

        loadout.try_add(Rank::Recruit, Item::new("Lanterna", ItemCategory::Zero, 1)).unwrap();
        assert_eq!(loadout.total_weight(), 4);
    }

    #[test]
    fn test_violations_after_demotion() {
        let mut loadout = Loadout::new();
        loadout.try_add(Rank::Operator, Item::new("Fuzil", ItemCategory::II, 2)).unwrap();
        loadout.try_add(Rank::Operator, Item::new("Pistola", ItemCategory::I, 1)).unwrap();

        assert!(loadout.violations(Rank::Operator).is_empty());
        assert_eq!(
            loadout.violations(Rank::Recruit),
            vec![CategoryViolation {
                category: ItemCategory::II,
                count: 1,
                limit: 0
            }]
        );
    }

    #[test]
    fn test_overloaded() {
        let mut loadout = Loadout::new();
        loadout.items.push(Item::new("Mochila", ItemCategory::Zero, 6));
        assert!(loadout.is_overloaded(5));
        assert!(!loadout.is_overloaded(6));
        assert!(loadout.remove("Mochila").is_some());
        assert!(loadout.remove("Mochila").is_none());
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let mut loadout = Loadout::new();
        loadout.items.push(Item::new("Cofre", ItemCategory::Zero, i32::MAX));
        loadout.items.push(Item::new("Moeda", ItemCategory::Zero, 1));
        assert_eq!(loadout.total_weight(), i32::MAX);
        assert!(loadout.is_overloaded(100));
    }
}
