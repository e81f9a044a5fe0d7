//! Dice system
//!
//! Parses dice formulas like "2d6+3", "1d20-1d4+2" and evaluates them
//! against an injected random source.

mod evaluator;
mod parser;

pub use evaluator::{evaluate, roll, RollResult, ScriptedRolls, TermRoll, UnitSource};
pub use parser::{parse, DiceFormula, Sign, Term, MAX_DICE, MAX_SIDES};
