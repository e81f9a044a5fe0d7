//! Subcommands and the state they share

mod resources;
mod roll;
mod turn;

pub use resources::{CanEquip, Caps, PeLimit};
pub use roll::Roll;
pub use turn::{StopBleeding, Turn};

use anyhow::{Context, Result};
use nex_core::config::load_rules_config;
use nex_core::{Character, ClassTable, RuleConstants, RulesConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Class table and constants in effect for this invocation
pub struct Rules {
    pub constants: RuleConstants,
    pub classes: ClassTable,
}

impl Rules {
    /// Built-in rules, overlaid with a rules file when one is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let config = load_rules_config(path)
                    .with_context(|| format!("Failed to load rules file: {}", path.display()))?;
                info!(path = %path.display(), classes = config.classes.len(), "rules file loaded");
                config
            }
            None => RulesConfig::default(),
        };

        Ok(Rules {
            classes: config.class_table(),
            constants: config.constants,
        })
    }
}

/// Seeded RNG for reproducible rolls, entropy otherwise
fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded rng");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

fn read_character(path: &Path) -> Result<Character> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read character file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse character file: {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
