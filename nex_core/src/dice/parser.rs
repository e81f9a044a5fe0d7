//! Dice formula parsing
//!
//! Grammar (case-insensitive): one or more terms joined by `+` or `-`,
//! where a term is `<count>d<sides>` or a bare non-negative constant.
//! Whitespace is allowed around operators but not inside a term.

use crate::error::{RulesError, RulesResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Most dice a single formula may roll
pub const MAX_DICE: u64 = 100;

/// Most faces a single die may have
pub const MAX_SIDES: u32 = 1000;

/// Sign applied to a term's contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Apply this sign to a value
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }

    fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }
}

impl TryFrom<i8> for Sign {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Sign::Plus),
            -1 => Ok(Sign::Minus),
            other => Err(format!("Sign must be 1 or -1, got {}", other)),
        }
    }
}

/// One term of a dice formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Term {
    /// `count` dice with `sides` faces each
    Dice { count: u32, sides: u32, sign: Sign },
    /// A flat modifier
    Constant { value: u32, sign: Sign },
}

impl Term {
    pub fn sign(&self) -> Sign {
        match self {
            Term::Dice { sign, .. } | Term::Constant { sign, .. } => *sign,
        }
    }

    /// Smallest signed contribution of this term
    pub fn min_value(&self) -> i64 {
        match *self {
            Term::Dice { count, sides, sign } => match sign {
                Sign::Plus => count as i64,
                Sign::Minus => -(count as i64).saturating_mul(sides as i64),
            },
            Term::Constant { value, sign } => sign.apply(value as i64),
        }
    }

    /// Largest signed contribution of this term
    pub fn max_value(&self) -> i64 {
        match *self {
            Term::Dice { count, sides, sign } => match sign {
                Sign::Plus => (count as i64).saturating_mul(sides as i64),
                Sign::Minus => -(count as i64),
            },
            Term::Constant { value, sign } => sign.apply(value as i64),
        }
    }

    fn check(&self) -> RulesResult<()> {
        if let Term::Dice { count, sides, .. } = *self {
            if count == 0 {
                return Err(RulesError::validation("Dice count must be at least 1"));
            }
            if sides == 0 {
                return Err(RulesError::validation("Die sides must be at least 1"));
            }
            if u64::from(count) > MAX_DICE {
                return Err(RulesError::validation(format!(
                    "Dice count {} exceeds the limit of {}",
                    count, MAX_DICE
                )));
            }
            if sides > MAX_SIDES {
                return Err(RulesError::validation(format!(
                    "Die sides {} exceed the limit of {}",
                    sides, MAX_SIDES
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Dice { count, sides, .. } => write!(f, "{}d{}", count, sides),
            Term::Constant { value, .. } => write!(f, "{}", value),
        }
    }
}

/// A parsed dice formula: a non-empty, ordered list of terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFormula {
    /// Formula text as given by the caller
    source: String,
    terms: Vec<Term>,
}

impl DiceFormula {
    /// Build a formula from terms, enforcing the structural invariants
    pub fn from_terms(terms: Vec<Term>) -> RulesResult<Self> {
        if terms.is_empty() {
            return Err(RulesError::validation("Dice formula must have at least one term"));
        }
        for term in &terms {
            term.check()?;
        }
        let mut formula = DiceFormula {
            source: String::new(),
            terms,
        };
        formula.check_dice_total()?;
        formula.source = formula.to_string();
        Ok(formula)
    }

    /// Original formula text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Terms in formula order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Total number of dice rolled by this formula
    pub fn dice_count(&self) -> u64 {
        self.terms
            .iter()
            .map(|t| match t {
                Term::Dice { count, .. } => *count as u64,
                Term::Constant { .. } => 0,
            })
            .sum()
    }

    /// Lowest achievable total
    pub fn min_total(&self) -> i64 {
        self.terms
            .iter()
            .fold(0i64, |acc, t| acc.saturating_add(t.min_value()))
    }

    /// Highest achievable total
    pub fn max_total(&self) -> i64 {
        self.terms
            .iter()
            .fold(0i64, |acc, t| acc.saturating_add(t.max_value()))
    }

    /// Expected total
    pub fn average(&self) -> f64 {
        self.terms
            .iter()
            .map(|t| match *t {
                Term::Dice { count, sides, sign } => {
                    let avg = count as f64 * (1.0 + sides as f64) / 2.0;
                    match sign {
                        Sign::Plus => avg,
                        Sign::Minus => -avg,
                    }
                }
                Term::Constant { value, sign } => sign.apply(value as i64) as f64,
            })
            .sum()
    }

    /// Re-check structural invariants (a deserialized formula skips the parser)
    pub(crate) fn validate(&self) -> RulesResult<()> {
        if self.terms.is_empty() {
            return Err(RulesError::invariant("Dice formula has no terms"));
        }
        for term in &self.terms {
            term.check()
                .map_err(|e| RulesError::invariant(format!("{} in term {}", e, term)))?;
        }
        match self.excess_dice() {
            Some(msg) => Err(RulesError::invariant(msg)),
            None => Ok(()),
        }
    }

    fn check_dice_total(&self) -> RulesResult<()> {
        match self.excess_dice() {
            Some(msg) => Err(RulesError::validation(msg)),
            None => Ok(()),
        }
    }

    fn excess_dice(&self) -> Option<String> {
        let total = self.dice_count();
        (total > MAX_DICE).then(|| format!("Formula rolls {} dice, the limit is {}", total, MAX_DICE))
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            match (i, term.sign()) {
                (0, Sign::Plus) => {}
                (_, sign) => write!(f, "{}", sign.symbol())?,
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

impl FromStr for DiceFormula {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a dice formula like "2d6+3"
pub fn parse(formula: &str) -> RulesResult<DiceFormula> {
    let normalized = formula.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(RulesError::validation("Dice formula is empty"));
    }

    let mut terms = Vec::new();
    let mut chars = normalized.chars().peekable();
    let mut pending_sign: Option<Sign> = None;

    loop {
        skip_whitespace(&mut chars);

        // A sign is only allowed in front of the first term or after a term
        let sign = match chars.peek() {
            Some('+') | Some('-') => {
                let sign = if chars.next() == Some('-') { Sign::Minus } else { Sign::Plus };
                if pending_sign.is_some() {
                    return Err(RulesError::validation(format!(
                        "Consecutive operators in '{}'",
                        formula.trim()
                    )));
                }
                skip_whitespace(&mut chars);
                sign
            }
            _ => pending_sign.take().unwrap_or(Sign::Plus),
        };

        let mut token = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '+' || c == '-' {
                break;
            }
            token.push(c);
            chars.next();
        }

        if token.is_empty() {
            let msg = match chars.peek() {
                Some(_) => format!("Consecutive operators in '{}'", formula.trim()),
                None => format!("Trailing operator in '{}'", formula.trim()),
            };
            return Err(RulesError::validation(msg));
        }

        terms.push(parse_term(&token, sign)?);

        skip_whitespace(&mut chars);
        match chars.peek() {
            None => break,
            Some('+') | Some('-') => {
                let sign = if chars.next() == Some('-') { Sign::Minus } else { Sign::Plus };
                pending_sign = Some(sign);
            }
            Some(_) => {
                return Err(RulesError::validation(format!(
                    "Missing operator before '{}'",
                    chars.collect::<String>()
                )));
            }
        }
    }

    let parsed = DiceFormula {
        source: formula.trim().to_string(),
        terms,
    };
    parsed.check_dice_total()?;
    Ok(parsed)
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

/// Parse a single `NdS` or `N` token
fn parse_term(token: &str, sign: Sign) -> RulesResult<Term> {
    match token.split_once('d') {
        Some((count_str, sides_str)) => {
            if count_str.is_empty() {
                return Err(RulesError::validation(format!("Missing dice count in '{}'", token)));
            }
            if sides_str.is_empty() {
                return Err(RulesError::validation(format!("Missing die sides in '{}'", token)));
            }
            let count = parse_number(count_str, token)?;
            let sides = parse_number(sides_str, token)?;
            let term = Term::Dice { count, sides, sign };
            term.check()?;
            Ok(term)
        }
        None => {
            let value = parse_number(token, token)?;
            Ok(Term::Constant { value, sign })
        }
    }
}

fn parse_number(digits: &str, token: &str) -> RulesResult<u32> {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(RulesError::validation(format!("Invalid token '{}'", token)));
    }
    digits
        .parse()
        .map_err(|_| RulesError::validation(format!("Number too large in '{}'", token)))
}
