//! The sample command: draw a random subset of a bank for a quiz round.

use std::path::PathBuf;

use anyhow::Result;
use csv::StringRecord;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::core::Bank;
use crate::io;

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub input: PathBuf,
    pub count: usize,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

pub fn run(config: SampleConfig) -> Result<()> {
    let bank = io::load_bank(&config.input)?;

    let drawn = match config.seed {
        Some(seed) => draw(&bank, config.count, &mut StdRng::seed_from_u64(seed)),
        None => draw(&bank, config.count, &mut rand::thread_rng()),
    };

    let sampled = Bank {
        header: bank.header.clone(),
        rows: drawn,
    };
    io::write_bank(&config.output, &sampled)?;

    println!(
        "Sampled {} of {} questions -> {}",
        sampled.len(),
        bank.len(),
        config.output.display()
    );
    Ok(())
}

/// Uniform draw without replacement; caps at the bank size.
fn draw<R: Rng + ?Sized>(bank: &Bank, count: usize, rng: &mut R) -> Vec<StringRecord> {
    let amount = count.min(bank.len());
    index::sample(rng, bank.len(), amount)
        .into_iter()
        .map(|i| bank.rows[i].clone())
        .collect()
}
