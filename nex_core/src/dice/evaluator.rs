//! Dice evaluation against an injected random source

use super::parser::{parse, DiceFormula, Term};
use crate::error::RulesResult;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Source of uniform values in `[0, 1)`
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> UnitSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed sequence of unit values, cycling when exhausted
///
/// Used for deterministic tests and for replaying recorded rolls.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedRolls {
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedRolls {
            values,
            position: 0,
        }
    }

    /// Number of values drawn so far
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl UnitSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// Faces rolled for one term of a formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRoll {
    pub term: Term,
    /// Individual die faces, empty for constants
    pub faces: Vec<u32>,
    /// Signed contribution of this term to the total
    pub subtotal: i64,
}

/// Outcome of evaluating a dice formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollResult {
    /// Formula text that was rolled
    pub formula: String,
    /// One entry per term, in formula order
    pub groups: Vec<TermRoll>,
    pub total: i64,
}

impl RollResult {
    /// All die faces in roll order
    pub fn dice(&self) -> Vec<u32> {
        self.groups.iter().flat_map(|g| g.faces.iter().copied()).collect()
    }

    /// Re-sum the recorded faces and constants
    pub fn recomputed_total(&self) -> i64 {
        self.groups.iter().fold(0i64, |acc, group| {
            let raw = match group.term {
                Term::Dice { .. } => group.faces.iter().map(|f| *f as i64).sum(),
                Term::Constant { value, .. } => value as i64,
            };
            acc.saturating_add(group.term.sign().apply(raw))
        })
    }

    /// The single die face, if exactly one die was rolled
    pub fn natural(&self) -> Option<u32> {
        let mut faces = self.groups.iter().flat_map(|g| g.faces.iter());
        match (faces.next(), faces.next()) {
            (Some(face), None) => Some(*face),
            _ => None,
        }
    }

    /// Single die showing its highest face
    pub fn is_critical(&self) -> bool {
        let sides = self.groups.iter().find_map(|g| match g.term {
            Term::Dice { sides, .. } => Some(sides),
            Term::Constant { .. } => None,
        });
        matches!((self.natural(), sides), (Some(face), Some(sides)) if face == sides)
    }

    /// Single die showing a 1
    pub fn is_fumble(&self) -> bool {
        self.natural() == Some(1)
    }
}

/// Evaluate a parsed formula, drawing one unit value per die in formula order
pub fn evaluate(formula: &DiceFormula, rng: &mut impl UnitSource) -> RulesResult<RollResult> {
    if let Err(e) = formula.validate() {
        warn!(formula = formula.source(), error = %e, "refusing to evaluate malformed formula");
        return Err(e);
    }

    let mut groups = Vec::with_capacity(formula.terms().len());
    let mut total: i64 = 0;

    for term in formula.terms() {
        let (faces, raw) = match *term {
            Term::Dice { count, sides, .. } => {
                let mut faces = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    faces.push(face_from_unit(rng.next_unit(), sides));
                }
                let sum: i64 = faces.iter().map(|f| *f as i64).sum();
                (faces, sum)
            }
            Term::Constant { value, .. } => (Vec::new(), value as i64),
        };

        let subtotal = term.sign().apply(raw);
        total = total.saturating_add(subtotal);
        groups.push(TermRoll {
            term: *term,
            faces,
            subtotal,
        });
    }

    debug!(formula = formula.source(), total, "dice rolled");

    Ok(RollResult {
        formula: formula.source().to_string(),
        groups,
        total,
    })
}

/// Parse and roll a formula using the thread-local RNG
pub fn roll(formula: &str) -> RulesResult<RollResult> {
    let parsed = parse(formula)?;
    let mut rng = rand::thread_rng();
    evaluate(&parsed, &mut rng)
}

/// `floor(u * sides) + 1`, kept inside `[1, sides]` for out-of-range sources
fn face_from_unit(unit: f64, sides: u32) -> u32 {
    let index = (unit * sides as f64).floor() as u32;
    index.saturating_add(1).clamp(1, sides)
}
