//! Quiz question schema shared with the quiz front end.
//!
//! Banks use a fixed eight-column layout: id, question text, four options,
//! a 1-based answer number, and an explanation.

use csv::StringRecord;
use serde::Serialize;

use super::errors::{Error, Result};

pub const ID_COLUMN: usize = 0;
pub const QUESTION_COLUMN: usize = 1;
pub const FIRST_OPTION_COLUMN: usize = 2;
pub const OPTION_COUNT: usize = 4;
pub const ANSWER_COLUMN: usize = 6;
pub const EXPLANATION_COLUMN: usize = 7;
pub const EXPECTED_COLUMNS: usize = 8;

/// One fully parsed question bank row.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// 0-based index into `options`; the CSV stores a 1-based value.
    pub answer: usize,
    pub explanation: String,
}

impl Question {
    /// Parse a raw record, enforcing the bank schema.
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        if record.len() < EXPECTED_COLUMNS {
            return Err(Error::Validation(format!(
                "expected {} columns, found {}",
                EXPECTED_COLUMNS,
                record.len()
            )));
        }

        let text = record[QUESTION_COLUMN].to_string();
        if text.trim().is_empty() {
            return Err(Error::Validation("question text is empty".to_string()));
        }

        let raw_answer = record[ANSWER_COLUMN].trim();
        let answer: usize = raw_answer
            .parse()
            .map_err(|_| Error::Validation(format!("answer is not a number: {raw_answer:?}")))?;
        if !(1..=OPTION_COUNT).contains(&answer) {
            return Err(Error::Validation(format!(
                "answer {answer} out of range 1..={OPTION_COUNT}"
            )));
        }

        let options = (FIRST_OPTION_COLUMN..FIRST_OPTION_COLUMN + OPTION_COUNT)
            .map(|i| record[i].to_string())
            .collect();

        Ok(Self {
            id: record[ID_COLUMN].to_string(),
            text,
            options,
            answer: answer - 1,
            explanation: record[EXPLANATION_COLUMN].to_string(),
        })
    }
}

/// One problem found while validating a bank.
#[derive(Debug, Clone, Serialize)]
pub struct RowIssue {
    /// 1-based line in the source file, header included.
    pub line: u64,
    pub message: String,
}

/// Outcome of running schema checks over a bank.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub issues: Vec<RowIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
