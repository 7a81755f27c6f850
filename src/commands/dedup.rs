//! The dedup command: merge banks and drop repeated question texts.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::QuizdedupConfig;
use crate::core::Bank;
use crate::dedup::dedup_rows;
use crate::io;

/// Resolved settings for one dedup run.
#[derive(Debug, Clone)]
pub struct DedupConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub key_column: usize,
}

impl DedupConfig {
    /// Fill unset CLI values from the file/default configuration.
    pub fn resolve(
        inputs: Vec<PathBuf>,
        output: Option<PathBuf>,
        key_column: Option<usize>,
        defaults: &QuizdedupConfig,
    ) -> Self {
        Self {
            inputs: if inputs.is_empty() {
                defaults.inputs.clone()
            } else {
                inputs
            },
            output: output.unwrap_or_else(|| defaults.output.clone()),
            key_column: key_column.unwrap_or(defaults.key_column),
        }
    }
}

pub fn run(config: DedupConfig) -> Result<()> {
    let bank = io::load_banks(&config.inputs, config.key_column)?;
    let total = bank.len();
    log::debug!(
        "Loaded {} rows from {} input files",
        total,
        config.inputs.len()
    );

    let outcome = dedup_rows(bank.rows, config.key_column);
    let deduped = Bank {
        header: bank.header,
        rows: outcome.unique,
    };
    io::write_bank(&config.output, &deduped)?;

    println!(
        "Kept {} of {} questions ({} duplicates) -> {}",
        deduped.len(),
        total,
        outcome.duplicates,
        config.output.display()
    );
    Ok(())
}
