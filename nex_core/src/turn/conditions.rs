//! Gameplay actions that add or remove conditions

use crate::character::Character;
use crate::types::Condition;
use tracing::debug;

impl Character {
    /// Add a condition. Returns the changes applied (empty if already present).
    pub fn apply_condition(&mut self, condition: Condition) -> Vec<String> {
        if self.is_dead || !self.conditions.insert(condition) {
            return Vec::new();
        }
        if condition == Condition::Dying {
            self.dying_rounds = 0;
        }
        debug!(character = %self.id, %condition, "condition applied");
        vec![format!("{} gained {}", self.name, condition)]
    }

    /// Remove a condition. Removing DYING resets the round counter.
    pub fn remove_condition(&mut self, condition: Condition) -> Vec<String> {
        if self.is_dead || !self.conditions.remove(&condition) {
            return Vec::new();
        }
        let mut changes = vec![format!("{} lost {}", self.name, condition)];
        if condition == Condition::Dying && self.dying_rounds > 0 {
            self.dying_rounds = 0;
            changes.push(format!("{} dying counter reset", self.name));
        }
        debug!(character = %self.id, %condition, "condition removed");
        changes
    }

    /// Lose PV. Dropping to 0 PV leaves the character DYING.
    pub fn take_damage(&mut self, amount: u32) -> Vec<String> {
        if self.is_dead {
            return Vec::new();
        }
        let lost = self.stats.pv.reduce(amount);
        let mut changes = vec![format!(
            "{} lost {} PV ({}/{})",
            self.name, lost, self.stats.pv.current, self.stats.pv.max
        )];
        if self.stats.pv.is_depleted() {
            changes.extend(self.apply_condition(Condition::Dying));
        }
        changes
    }

    /// Recover PV. Any PV above 0 ends DYING.
    pub fn heal(&mut self, amount: u32) -> Vec<String> {
        if self.is_dead {
            return Vec::new();
        }
        let gained = self.stats.pv.restore(amount);
        let mut changes = vec![format!(
            "{} recovered {} PV ({}/{})",
            self.name, gained, self.stats.pv.current, self.stats.pv.max
        )];
        if !self.stats.pv.is_depleted() {
            changes.extend(self.remove_condition(Condition::Dying));
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use crate::character::Character;
    use crate::resources::ResourcePool;
    use crate::turn::process_turn;
    use crate::types::Condition;

    fn wounded(pv: i32) -> Character {
        let mut c = Character::new("c1", "Joui", "combatente");
        c.stats.pv = ResourcePool { current: pv, max: 20 };
        c
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut c = wounded(10);
        assert_eq!(c.apply_condition(Condition::Vulnerable).len(), 1);
        assert!(c.apply_condition(Condition::Vulnerable).is_empty());
        assert!(c.has(Condition::Vulnerable));
    }

    #[test]
    fn test_damage_to_zero_starts_dying() {
        let mut c = wounded(5);
        let changes = c.take_damage(8);
        assert_eq!(c.stats.pv.current, 0);
        assert!(c.has(Condition::Dying));
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn test_heal_ends_dying_and_resets_counter() {
        let mut c = wounded(1);
        c.take_damage(1);
        let c = process_turn(&c).character;
        assert_eq!(c.dying_rounds, 1);

        let mut c = c;
        c.heal(3);
        assert!(!c.has(Condition::Dying));
        assert_eq!(c.dying_rounds, 0);
        assert_eq!(c.stats.pv.current, 3);
    }

    #[test]
    fn test_dead_characters_do_not_change() {
        let mut c = wounded(0);
        c.is_dead = true;
        assert!(c.apply_condition(Condition::Bleeding).is_empty());
        assert!(c.heal(5).is_empty());
        assert!(c.take_damage(5).is_empty());
        assert_eq!(c.stats.pv.current, 0);
    }
}
