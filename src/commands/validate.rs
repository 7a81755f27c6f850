//! The validate command: check every row against the quiz schema.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::cli;
use crate::core::{Bank, Question, RowIssue, ValidationReport};
use crate::io;
use crate::io::output::{create_writer, OutputFormat};

#[derive(Debug, Clone)]
pub struct ValidateConfig {
    pub input: PathBuf,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run(config: ValidateConfig) -> Result<()> {
    let bank = io::load_bank(&config.input)?;
    let report = validate_bank(&bank);

    let format = match config.format {
        cli::OutputFormat::Terminal => OutputFormat::Terminal,
        cli::OutputFormat::Json => OutputFormat::Json,
    };
    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    create_writer(sink, format).write_report(&report)?;

    if !report.is_clean() {
        anyhow::bail!(
            "{} of {} rows failed schema checks",
            report.issues.len(),
            report.total_rows
        );
    }
    Ok(())
}

/// Run schema checks over every data row of a bank.
pub fn validate_bank(bank: &Bank) -> ValidationReport {
    let mut report = ValidationReport {
        total_rows: bank.len(),
        ..Default::default()
    };

    for (index, row) in bank.rows.iter().enumerate() {
        match Question::from_record(row) {
            Ok(_) => report.valid_rows += 1,
            Err(e) => report.issues.push(RowIssue {
                // Data rows start on line 2; fall back when the record
                // carries no position.
                line: row
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(index as u64 + 2),
                message: e.to_string(),
            }),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;
    use pretty_assertions::assert_eq;

    fn valid_row(id: &str, text: &str) -> StringRecord {
        StringRecord::from(vec![id, text, "a", "b", "c", "d", "2", "because"])
    }

    #[test]
    fn clean_bank_produces_clean_report() {
        let bank = Bank {
            header: StringRecord::from(vec!["id", "question"]),
            rows: vec![valid_row("1", "Q1"), valid_row("2", "Q2")],
        };
        let report = validate_bank(&bank);
        assert_eq!(report.total_rows, 2);
        assert_eq!(report.valid_rows, 2);
        assert!(report.is_clean());
    }

    #[test]
    fn issues_carry_fallback_line_numbers() {
        let bank = Bank {
            header: StringRecord::from(vec!["id", "question"]),
            rows: vec![
                valid_row("1", "Q1"),
                StringRecord::from(vec!["2", "Q2", "a", "b", "c", "d", "9", "x"]),
            ],
        };
        let report = validate_bank(&bank);
        assert_eq!(report.valid_rows, 1);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].line, 3);
        assert!(report.issues[0].message.contains("out of range"));
    }
}
