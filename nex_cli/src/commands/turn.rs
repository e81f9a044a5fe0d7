//! Turn processing and the stop-bleeding check on character files

use anyhow::{Context, Result};
use clap::Parser;
use nex_core::turn::{process_turn_with, stop_bleeding_with};
use std::path::PathBuf;
use tracing::info;

use super::{print_json, read_character, rng_for, Rules};

/// Process one turn for a character
#[derive(Parser)]
pub struct Turn {
    /// Character JSON file
    #[arg(value_name = "CHARACTER.json")]
    character: PathBuf,
}

impl Turn {
    pub fn execute(self, rules: &Rules) -> Result<()> {
        let character = read_character(&self.character)?;
        let outcome = process_turn_with(&character, &rules.constants.turn);

        for change in &outcome.changes {
            info!(character = %character.id, "{}", change);
        }
        print_json(&outcome)
    }
}

/// Attempt to stop a character's bleeding
#[derive(Parser)]
pub struct StopBleeding {
    /// Character JSON file
    #[arg(value_name = "CHARACTER.json")]
    character: PathBuf,

    /// Seed for a reproducible check
    #[arg(short, long, value_name = "N")]
    seed: Option<u64>,
}

impl StopBleeding {
    pub fn execute(self, rules: &Rules) -> Result<()> {
        let character = read_character(&self.character)?;
        let check = stop_bleeding_with(&character, &mut rng_for(self.seed), &rules.constants.bleeding)
            .with_context(|| format!("{} cannot attempt the check", character.name))?;

        info!(character = %character.id, success = check.success, "{}", check.message);
        print_json(&check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_character_file_is_reported() {
        let rules = Rules::load(None).unwrap();
        let cmd = Turn {
            character: PathBuf::from("/nonexistent/agent.json"),
        };
        let err = cmd.execute(&rules).err().unwrap();
        assert!(err.to_string().contains("agent.json"));
    }
}
