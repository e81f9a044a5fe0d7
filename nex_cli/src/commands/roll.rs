//! Roll a dice formula

use anyhow::{Context, Result};
use clap::Parser;
use nex_core::dice::Sign;
use nex_core::{evaluate, parse, RollResult};

use super::{print_json, rng_for};

/// Roll a dice formula
#[derive(Parser)]
pub struct Roll {
    /// Formula such as 2d6+3 or "1d20 - 1"
    #[arg(value_name = "FORMULA")]
    formula: String,

    /// Seed for a reproducible roll
    #[arg(short, long, value_name = "N")]
    seed: Option<u64>,

    /// Print the full roll as JSON
    #[arg(long)]
    json: bool,
}

impl Roll {
    pub fn execute(self) -> Result<()> {
        let formula = parse(&self.formula)
            .with_context(|| format!("Invalid dice formula: {}", self.formula))?;
        let result = evaluate(&formula, &mut rng_for(self.seed))?;

        if self.json {
            print_json(&result)
        } else {
            println!("{}", summary(&result));
            Ok(())
        }
    }
}

/// One-line summary, e.g. `2d6+3: [1, 6] + 3 = 10`
fn summary(result: &RollResult) -> String {
    let mut parts = Vec::new();
    for group in &result.groups {
        let sign = match group.term.sign() {
            Sign::Plus => "+",
            Sign::Minus => "-",
        };
        let body = if group.faces.is_empty() {
            group.subtotal.abs().to_string()
        } else {
            format!("{:?}", group.faces)
        };
        if parts.is_empty() && sign == "+" {
            parts.push(body);
        } else {
            parts.push(format!("{} {}", sign, body));
        }
    }

    let mut line = format!("{}: {} = {}", result.formula, parts.join(" "), result.total);
    if result.is_critical() {
        line.push_str(" (critical)");
    } else if result.is_fumble() {
        line.push_str(" (fumble)");
    }
    line
}
