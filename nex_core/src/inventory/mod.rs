//! Inventory rules - rank-gated item categories and carried weight

mod loadout;

pub use loadout::{CategoryViolation, Item, Loadout};

use crate::types::{ItemCategory, Rank};

/// Marker for categories without a count limit
pub const UNLIMITED: u32 = u32::MAX;

/// Maximum items per category, indexed by `[rank][category]`
pub const RANK_CATEGORY_PERMISSIONS: [[u32; 5]; 5] = [
    // 0, I, II, III, IV
    [UNLIMITED, 2, 0, 0, 0], // Recruit
    [UNLIMITED, 3, 1, 0, 0], // Operator
    [UNLIMITED, 3, 2, 1, 0], // Special agent
    [UNLIMITED, 3, 3, 2, 1], // Operations officer
    [UNLIMITED, 3, 3, 3, 2], // Elite agent
];

/// How many items of `category` a character of `rank` may hold
pub fn category_limit(rank: Rank, category: ItemCategory) -> u32 {
    RANK_CATEGORY_PERMISSIONS[rank.index()][category.index()]
}

/// Whether one more item of `category` fits next to `current_count` others
pub fn can_equip(rank: Rank, category: ItemCategory, current_count: u32) -> bool {
    current_count < category_limit(rank, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recruit_limits() {
        assert!(can_equip(Rank::Recruit, ItemCategory::I, 0));
        assert!(can_equip(Rank::Recruit, ItemCategory::I, 1));
        assert!(!can_equip(Rank::Recruit, ItemCategory::I, 2));
        assert!(!can_equip(Rank::Recruit, ItemCategory::II, 0));
    }

    #[test]
    fn test_category_zero_is_unlimited() {
        for rank in Rank::all() {
            assert!(can_equip(*rank, ItemCategory::Zero, 10_000));
        }
    }

    #[test]
    fn test_limits_never_shrink_with_rank() {
        for category in ItemCategory::all() {
            for pair in Rank::all().windows(2) {
                assert!(category_limit(pair[0], *category) <= category_limit(pair[1], *category));
            }
        }
    }

    #[test]
    fn test_elite_agent_category_four() {
        assert_eq!(category_limit(Rank::EliteAgent, ItemCategory::IV), 2);
        assert!(can_equip(Rank::EliteAgent, ItemCategory::IV, 1));
        assert!(!can_equip(Rank::EliteAgent, ItemCategory::IV, 2));
        assert!(!can_equip(Rank::SpecialAgent, ItemCategory::IV, 0));
    }
}
