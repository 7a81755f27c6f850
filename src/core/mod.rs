pub mod errors;
pub mod question;

pub use errors::{Error, Result};
pub use question::{Question, RowIssue, ValidationReport, EXPECTED_COLUMNS};

use csv::StringRecord;

/// An in-memory question bank: one header plus data rows in input order.
#[derive(Debug, Clone)]
pub struct Bank {
    /// Header of the first input file, emitted verbatim on output.
    pub header: StringRecord,
    /// Data rows in file order, then row order within each file.
    pub rows: Vec<StringRecord>,
}

impl Bank {
    pub fn new(header: StringRecord) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
