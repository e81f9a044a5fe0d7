//! Turn processing - automatic condition transitions
//!
//! Each call to [`process_turn`] advances one round:
//!
//! 1. An UNCONSCIOUS (or dead) character is left untouched.
//! 2. DYING advances its round counter; reaching the limit kills the character.
//! 3. BLEEDING persists until removed by [`stop_bleeding`].

mod bleeding;
mod conditions;

pub use bleeding::{stop_bleeding, stop_bleeding_with, BleedCheck};

use crate::character::Character;
use crate::config::TurnConstants;
use crate::types::Condition;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result of processing one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub character: Character,
    /// Human-readable description of every change applied
    pub changes: Vec<String>,
    pub is_dead: bool,
}

/// What a condition does when a turn is processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// No automatic transitions happen this turn
    Halt,
    /// Advance the dying counter
    CountDown,
    /// Stays until removed by an action
    Persist,
    /// Not affected by turn processing
    Inert,
}

fn transition(condition: Condition) -> Transition {
    match condition {
        Condition::Unconscious => Transition::Halt,
        Condition::Dying => Transition::CountDown,
        Condition::Bleeding => Transition::Persist,
        Condition::Vulnerable
        | Condition::Shaken
        | Condition::Frightened
        | Condition::Stunned
        | Condition::Prone
        | Condition::Blinded
        | Condition::Paralyzed
        | Condition::Fatigued
        | Condition::Exhausted => Transition::Inert,
    }
}

/// Process one turn with the default round limit
pub fn process_turn(character: &Character) -> TurnOutcome {
    process_turn_with(character, &TurnConstants::default())
}

/// Process one turn for a character
pub fn process_turn_with(character: &Character, constants: &TurnConstants) -> TurnOutcome {
    let halted = character
        .conditions
        .iter()
        .any(|c| transition(*c) == Transition::Halt);

    if character.is_dead || halted {
        debug!(character = %character.id, dead = character.is_dead, "turn skipped");
        return TurnOutcome {
            character: character.clone(),
            changes: Vec::new(),
            is_dead: character.is_dead,
        };
    }

    let mut next = character.clone();
    let mut changes = Vec::new();
    next.pe_spent_this_turn = 0;

    for condition in &character.conditions {
        match transition(*condition) {
            Transition::CountDown => {
                next.dying_rounds = next.dying_rounds.saturating_add(1);
                changes.push(format!(
                    "{} is dying: round {}/{}",
                    next.name, next.dying_rounds, constants.dying_rounds_to_death
                ));
                if next.dying_rounds >= constants.dying_rounds_to_death {
                    next.is_dead = true;
                    changes.push(format!(
                        "{} died after {} rounds dying",
                        next.name, next.dying_rounds
                    ));
                    info!(character = %next.id, "character died");
                }
            }
            Transition::Persist | Transition::Inert | Transition::Halt => {}
        }
    }

    debug!(character = %next.id, changes = changes.len(), "turn processed");

    TurnOutcome {
        is_dead: next.is_dead,
        character: next,
        changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dying(rounds: u32) -> Character {
        let mut c = Character::new("c1", "Arthur", "combatente").with_condition(Condition::Dying);
        c.dying_rounds = rounds;
        c
    }

    #[test]
    fn test_dying_counter_advances() {
        let outcome = process_turn(&dying(0));
        assert_eq!(outcome.character.dying_rounds, 1);
        assert!(!outcome.is_dead);
        assert_eq!(outcome.changes.len(), 1);
    }

    #[test]
    fn test_third_dying_round_kills() {
        let outcome = process_turn(&dying(2));
        assert_eq!(outcome.character.dying_rounds, 3);
        assert!(outcome.is_dead);
        assert!(outcome.character.is_dead);
        assert_eq!(outcome.changes.len(), 2);
    }

    #[test]
    fn test_dead_is_terminal() {
        let dead = process_turn(&dying(2)).character;
        let again = process_turn(&dead);
        assert!(again.is_dead);
        assert!(again.changes.is_empty());
        assert_eq!(again.character.dying_rounds, 3);
    }

    #[test]
    fn test_unconscious_skips_everything() {
        let mut c = dying(1).with_condition(Condition::Unconscious);
        c.pe_spent_this_turn = 2;
        let outcome = process_turn(&c);
        assert_eq!(outcome.character, c);
        assert!(outcome.changes.is_empty());
        assert!(!outcome.is_dead);
    }

    #[test]
    fn test_bleeding_persists() {
        let c = Character::new("c1", "Arthur", "combatente").with_condition(Condition::Bleeding);
        let outcome = process_turn(&c);
        assert!(outcome.character.has(Condition::Bleeding));
        assert!(outcome.changes.is_empty());
    }

    #[test]
    fn test_turn_resets_pe_tally() {
        let mut c = Character::new("c1", "Arthur", "combatente");
        c.pe_spent_this_turn = 3;
        let outcome = process_turn(&c);
        assert_eq!(outcome.character.pe_spent_this_turn, 0);
    }

    #[test]
    fn test_saturated_counter_from_storage() {
        let outcome = process_turn(&dying(u32::MAX));
        assert_eq!(outcome.character.dying_rounds, u32::MAX);
        assert!(outcome.is_dead);
    }

    #[test]
    fn test_custom_round_limit() {
        let constants = TurnConstants {
            dying_rounds_to_death: 5,
        };
        let outcome = process_turn_with(&dying(2), &constants);
        assert!(!outcome.is_dead);
        assert_eq!(outcome.character.dying_rounds, 3);
    }
}
