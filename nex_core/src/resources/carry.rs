//! Carry capacity from Strength

use crate::config::CarryConstants;

/// `max(2, 5 * strength)`
pub fn max_carry_capacity(strength: i32) -> i32 {
    max_carry_capacity_with(strength, &CarryConstants::default())
}

/// Carry capacity with custom per-strength and minimum values
pub fn max_carry_capacity_with(strength: i32, constants: &CarryConstants) -> i32 {
    constants
        .per_strength
        .saturating_mul(strength)
        .max(constants.minimum)
}

pub fn is_overloaded(current_weight: i32, max_capacity: i32) -> bool {
    current_weight > max_capacity
}
