// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dedup;
pub mod io;

// Re-export commonly used types
pub use crate::core::{Bank, Error, Question, Result, RowIssue, ValidationReport};

pub use crate::dedup::{dedup_rows, DedupOutcome};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
