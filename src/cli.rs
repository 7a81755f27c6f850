use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Terminal,
    /// Machine-readable JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "quizdedup")]
#[command(about = "Question bank maintenance for CSV quiz files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default quizdedup.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Merge question banks, keeping the first row per question text
    Dedup {
        /// Input CSV files, merged in the order given (defaults to the
        /// configured inputs)
        inputs: Vec<PathBuf>,

        /// Output file (defaults to the configured output path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Zero-based column holding the question text
        #[arg(long = "key-column", env = "QUIZDEDUP_KEY_COLUMN")]
        key_column: Option<usize>,
    },

    /// Draw a random subset of questions from a bank
    Sample {
        /// Input CSV file
        input: PathBuf,

        /// Number of questions to draw
        #[arg(short = 'n', long = "count", default_value = "30")]
        count: usize,

        /// Output file
        #[arg(short, long, default_value = "questions_sample.csv")]
        output: PathBuf,

        /// RNG seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check rows against the eight-column quiz schema
    Validate {
        /// Input CSV file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
