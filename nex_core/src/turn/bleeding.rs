//! Stop-bleeding check: `1d20 + Vigor` against a fixed difficulty

use crate::character::Character;
use crate::config::BleedingConstants;
use crate::dice::{evaluate, DiceFormula, RollResult, Sign, Term, UnitSource};
use crate::error::{RulesError, RulesResult};
use crate::types::Condition;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of a stop-bleeding attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BleedCheck {
    pub success: bool,
    pub message: String,
    pub roll: RollResult,
    /// Updated character, present when the bleeding stopped
    pub character: Option<Character>,
}

/// Attempt to stop bleeding with the default difficulty
pub fn stop_bleeding(character: &Character, rng: &mut impl UnitSource) -> RulesResult<BleedCheck> {
    stop_bleeding_with(character, rng, &BleedingConstants::default())
}

/// Attempt to stop bleeding
///
/// Every call consumes a roll. A dead or non-bleeding character, or one whose
/// conditions prevent acting (UNCONSCIOUS, PARALYZED, STUNNED), is refused
/// before rolling.
pub fn stop_bleeding_with(
    character: &Character,
    rng: &mut impl UnitSource,
    constants: &BleedingConstants,
) -> RulesResult<BleedCheck> {
    if let Err(e) = check_can_treat(character) {
        warn!(character = %character.id, error = %e, "stop bleeding refused");
        return Err(e);
    }

    let formula = check_formula(constants.check_die, character.attributes.vigor)?;
    let roll = evaluate(&formula, rng)?;
    let success = roll.total >= constants.check_dt;

    debug!(
        character = %character.id,
        total = roll.total,
        dt = constants.check_dt,
        success,
        "stop bleeding check"
    );

    if success {
        let mut next = character.clone();
        next.conditions.remove(&Condition::Bleeding);
        Ok(BleedCheck {
            success,
            message: format!(
                "{} stopped the bleeding ({} vs DT {})",
                character.name, roll.total, constants.check_dt
            ),
            roll,
            character: Some(next),
        })
    } else {
        Ok(BleedCheck {
            success,
            message: format!(
                "{} failed to stop the bleeding ({} vs DT {})",
                character.name, roll.total, constants.check_dt
            ),
            roll,
            character: None,
        })
    }
}

fn check_can_treat(character: &Character) -> RulesResult<()> {
    if character.is_dead {
        return Err(RulesError::precondition(format!("{} is dead", character.name)));
    }
    if !character.can_act() {
        return Err(RulesError::precondition(format!(
            "{} cannot act",
            character.name
        )));
    }
    if !character.has(Condition::Bleeding) {
        return Err(RulesError::precondition(format!(
            "{} is not bleeding",
            character.name
        )));
    }
    Ok(())
}

/// `1d<die>` with Vigor as a signed bonus
fn check_formula(die: u32, vigor: i32) -> RulesResult<DiceFormula> {
    let mut terms = vec![Term::Dice {
        count: 1,
        sides: die,
        sign: Sign::Plus,
    }];
    if vigor != 0 {
        terms.push(Term::Constant {
            value: vigor.unsigned_abs(),
            sign: if vigor < 0 { Sign::Minus } else { Sign::Plus },
        });
    }
    DiceFormula::from_terms(terms)
}
