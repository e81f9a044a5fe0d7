//! Resource scaling - PV/SAN/PE caps, Defense and pool clamping
//!
//! Caps are derived from the class table, attributes and NEX:
//!
//! - `pv_max  = pv_initial  + floor(nex / 5) * pv_per_nex`
//! - `san_max = san_initial + floor(nex / 5) * san_per_nex`
//! - `pe_max  = pe_initial  + floor(nex / 5) * pe_per_nex`
//! - `defense = 10 + agility`
//!
//! `clamp_stats` is the single place where `0 <= current <= max` is enforced
//! after caps change.

mod carry;
mod class;
mod pe_limit;
mod pool;

pub use carry::{is_overloaded, max_carry_capacity, max_carry_capacity_with};
pub use class::{ClassConfig, ClassTable};
pub use pe_limit::{can_spend, pe_limit_for_nex};
pub use pool::ResourcePool;

use crate::types::Attributes;
use serde::{Deserialize, Serialize};

/// Base defense before Agility
pub const BASE_DEFENSE: i32 = 10;

/// NEX points per scaling step
pub const NEX_STEP: u32 = 5;

/// Derived maximums for a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCaps {
    pub pv_max: i32,
    pub san_max: i32,
    pub pe_max: i32,
    pub defense: i32,
}

impl Default for ResourceCaps {
    /// Defense-only fallback used when class, attributes or NEX are unknown
    fn default() -> Self {
        ResourceCaps {
            pv_max: 0,
            san_max: 0,
            pe_max: 0,
            defense: BASE_DEFENSE,
        }
    }
}

/// Current resource pools of a character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub pv: ResourcePool,
    pub san: ResourcePool,
    pub pe: ResourcePool,
    pub nex: u32,
}

impl CharacterStats {
    /// Full pools at the given caps
    pub fn full(caps: &ResourceCaps, nex: u32) -> Self {
        CharacterStats {
            pv: ResourcePool::full(caps.pv_max),
            san: ResourcePool::full(caps.san_max),
            pe: ResourcePool::full(caps.pe_max),
            nex,
        }
    }
}

/// `initial + floor(nex / 5) * per_nex`, saturating at `i32::MAX`
fn scaled(initial: u32, per_nex: u32, nex: u32) -> i32 {
    let steps = (nex / NEX_STEP) as u64;
    let value = initial as u64 + steps * per_nex as u64;
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Compute resource caps from class, attributes and NEX
pub fn compute_caps(class: &ClassConfig, attributes: &Attributes, nex: u32) -> ResourceCaps {
    ResourceCaps {
        pv_max: scaled(class.pv_initial, class.pv_per_nex, nex),
        san_max: scaled(class.san_initial, class.san_per_nex, nex),
        pe_max: scaled(class.pe_initial, class.pe_per_nex, nex),
        defense: BASE_DEFENSE.saturating_add(attributes.agility),
    }
}

/// Compute caps, falling back to `{0, 0, 0, defense 10}` when any input is missing
pub fn compute_caps_or_default(
    class: Option<&ClassConfig>,
    attributes: Option<&Attributes>,
    nex: Option<u32>,
) -> ResourceCaps {
    match (class, attributes, nex) {
        (Some(class), Some(attributes), Some(nex)) => compute_caps(class, attributes, nex),
        _ => ResourceCaps::default(),
    }
}

/// Clamp every pool into `[0, cap]` and adopt the caps as new maximums
///
/// Missing stats are synthesized as empty pools at the given caps.
pub fn clamp_stats(stats: Option<&CharacterStats>, caps: &ResourceCaps) -> CharacterStats {
    match stats {
        Some(stats) => CharacterStats {
            pv: stats.pv.clamped_to(caps.pv_max),
            san: stats.san.clamped_to(caps.san_max),
            pe: stats.pe.clamped_to(caps.pe_max),
            nex: stats.nex,
        },
        None => CharacterStats {
            pv: ResourcePool::empty(caps.pv_max),
            san: ResourcePool::empty(caps.san_max),
            pe: ResourcePool::empty(caps.pe_max),
            nex: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_class() -> ClassConfig {
        ClassConfig::new("test", "Test", (20, 5), (10, 2), (2, 1))
    }

    #[test]
    fn test_compute_caps_example() {
        let attrs = Attributes { agility: 3, ..Default::default() };
        let caps = compute_caps(&example_class(), &attrs, 12);

        // 20 + floor(12/5)*5 = 30
        assert_eq!(caps.pv_max, 30);
        // 10 + 2*2 = 14
        assert_eq!(caps.san_max, 14);
        // 2 + 2*1 = 4
        assert_eq!(caps.pe_max, 4);
        assert_eq!(caps.defense, 13);
    }

    #[test]
    fn test_compute_caps_steps_every_five_nex() {
        let attrs = Attributes::default();
        let at_4 = compute_caps(&example_class(), &attrs, 4);
        let at_5 = compute_caps(&example_class(), &attrs, 5);
        let at_9 = compute_caps(&example_class(), &attrs, 9);
        let at_10 = compute_caps(&example_class(), &attrs, 10);

        assert_eq!(at_4.pv_max, 20);
        assert_eq!(at_5.pv_max, 25);
        assert_eq!(at_9.pv_max, 25);
        assert_eq!(at_10.pv_max, 30);
    }

    #[test]
    fn test_negative_agility_lowers_defense() {
        let attrs = Attributes { agility: -2, ..Default::default() };
        assert_eq!(compute_caps(&example_class(), &attrs, 0).defense, 8);
    }

    #[test]
    fn test_missing_inputs_fall_back() {
        let class = example_class();
        let attrs = Attributes { agility: 4, ..Default::default() };
        let fallback = ResourceCaps {
            pv_max: 0,
            san_max: 0,
            pe_max: 0,
            defense: 10,
        };

        assert_eq!(compute_caps_or_default(None, Some(&attrs), Some(10)), fallback);
        assert_eq!(compute_caps_or_default(Some(&class), None, Some(10)), fallback);
        assert_eq!(compute_caps_or_default(Some(&class), Some(&attrs), None), fallback);
        assert_eq!(
            compute_caps_or_default(Some(&class), Some(&attrs), Some(10)).defense,
            14
        );
    }

    #[test]
    fn test_clamp_stats_lowers_overflowing_pools() {
        let caps = ResourceCaps {
            pv_max: 20,
            san_max: 10,
            pe_max: 4,
            defense: 10,
        };
        let stats = CharacterStats {
            pv: ResourcePool { current: 35, max: 40 },
            san: ResourcePool { current: -3, max: 10 },
            pe: ResourcePool { current: 2, max: 2 },
            nex: 15,
        };

        let clamped = clamp_stats(Some(&stats), &caps);
        assert_eq!(clamped.pv, ResourcePool { current: 20, max: 20 });
        assert_eq!(clamped.san, ResourcePool { current: 0, max: 10 });
        assert_eq!(clamped.pe, ResourcePool { current: 2, max: 4 });
        assert_eq!(clamped.nex, 15);
    }

    #[test]
    fn test_clamp_stats_synthesizes_missing() {
        let caps = ResourceCaps {
            pv_max: 20,
            san_max: 12,
            pe_max: 2,
            defense: 11,
        };
        let stats = clamp_stats(None, &caps);
        assert_eq!(stats.pv, ResourcePool { current: 0, max: 20 });
        assert_eq!(stats.san, ResourcePool { current: 0, max: 12 });
        assert_eq!(stats.pe, ResourcePool { current: 0, max: 2 });
        assert_eq!(stats.nex, 0);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let caps = ResourceCaps {
            pv_max: 5,
            san_max: 5,
            pe_max: 5,
            defense: 10,
        };
        let stats = CharacterStats {
            pv: ResourcePool { current: 9, max: 9 },
            san: ResourcePool { current: 3, max: 9 },
            pe: ResourcePool { current: -1, max: 9 },
            nex: 5,
        };
        let once = clamp_stats(Some(&stats), &caps);
        let twice = clamp_stats(Some(&once), &caps);
        assert_eq!(once, twice);
    }
}
