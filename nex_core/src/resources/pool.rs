//! ResourcePool - A current/max pair kept inside `[0, max]`

use crate::error::{RulesError, RulesResult};
use serde::{Deserialize, Serialize};

/// A resource pool such as PV, SAN or PE
///
/// `current` is signed so that out-of-range values coming from storage can be
/// clamped back instead of failing to deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub current: i32,
    pub max: i32,
}

impl ResourcePool {
    /// Pool filled to its maximum
    pub fn full(max: i32) -> Self {
        let max = max.max(0);
        ResourcePool { current: max, max }
    }

    /// Empty pool with the given maximum
    pub fn empty(max: i32) -> Self {
        ResourcePool {
            current: 0,
            max: max.max(0),
        }
    }

    /// Adopt a new maximum and clamp current into `[0, max]`
    pub fn clamped_to(&self, max: i32) -> Self {
        let max = max.max(0);
        ResourcePool {
            current: self.current.clamp(0, max),
            max,
        }
    }

    /// Whether the pool has at least `cost` left
    pub fn can_afford(&self, cost: u32) -> bool {
        i64::from(self.current) >= i64::from(cost)
    }

    /// Spend exactly `cost`, refusing when the pool is short
    pub fn try_spend(&mut self, cost: u32) -> RulesResult<()> {
        if !self.can_afford(cost) {
            return Err(RulesError::precondition(format!(
                "Not enough points: need {}, have {}",
                cost, self.current
            )));
        }
        self.current -= cost as i32;
        Ok(())
    }

    /// Remove up to `amount`, stopping at zero. Returns the amount removed.
    pub fn reduce(&mut self, amount: u32) -> i32 {
        let before = self.current;
        self.current = (i64::from(self.current) - i64::from(amount)).max(0) as i32;
        before - self.current
    }

    /// Restore up to `amount`, stopping at max. Returns the amount restored.
    pub fn restore(&mut self, amount: u32) -> i32 {
        let before = self.current;
        self.current = (i64::from(self.current) + i64::from(amount)).min(i64::from(self.max)) as i32;
        self.current - before
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}
