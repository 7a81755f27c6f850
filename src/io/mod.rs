//! CSV input and output for question banks.

pub mod output;

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::core::errors::{Error, Result};
use crate::core::Bank;

/// Read one or more CSV files into a single bank.
///
/// Files are read in the order given. The header of the first file is kept;
/// each later file's header row is consumed and discarded. Every data row is
/// checked to cover `key_column` so downstream stages can assume it.
pub fn load_banks(paths: &[PathBuf], key_column: usize) -> Result<Bank> {
    let mut header: Option<StringRecord> = None;
    let mut rows = Vec::new();

    for path in paths {
        let file_header = read_rows_into(path, key_column, &mut rows)?;
        if header.is_none() {
            header = Some(file_header);
        }
    }

    let header =
        header.ok_or_else(|| Error::Configuration("no input files given".to_string()))?;
    Ok(Bank { header, rows })
}

/// Read a single CSV file into a bank without key checks.
pub fn load_bank(path: &Path) -> Result<Bank> {
    load_banks(&[path.to_path_buf()], 0)
}

/// Append one file's data rows to `rows` and return its header.
fn read_rows_into(
    path: &Path,
    key_column: usize,
    rows: &mut Vec<StringRecord>,
) -> Result<StringRecord> {
    let file = File::open(path).map_err(|e| {
        Error::file_system(format!("failed to open {}", path.display()), path, e)
    })?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let header = reader.headers()?.clone();

    let before = rows.len();
    for record in reader.records() {
        let record = record?;
        if record.len() <= key_column {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(Error::malformed_row(
                path,
                line,
                format!(
                    "row has {} fields, key column is {}",
                    record.len(),
                    key_column
                ),
            ));
        }
        rows.push(record);
    }
    log::debug!("Read {} rows from {}", rows.len() - before, path.display());

    Ok(header)
}

/// Write a bank to `path`, replacing any existing file.
pub fn write_bank(path: &Path, bank: &Bank) -> Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(&bank.header)?;
    for row in &bank.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn keeps_first_header_and_skips_later_ones() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.csv", "question,answer\nQ1,1\n");
        let b = write_file(&dir, "b.csv", "frage,antwort\nQ2,2\n");

        let bank = load_banks(&[a, b], 0).unwrap();
        assert_eq!(&bank.header[0], "question");
        assert_eq!(bank.len(), 2);
        assert_eq!(&bank.rows[1][0], "Q2");
    }

    #[test]
    fn missing_file_is_a_file_system_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = load_banks(&[missing.clone()], 0).unwrap_err();
        match err {
            Error::FileSystem { path, .. } => assert_eq!(path, Some(missing)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn row_missing_key_column_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "short.csv", "q,a,b\nQ1,1,x\nQ2\n");

        let err = load_banks(&[path], 2).unwrap_err();
        match err {
            Error::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_list_is_rejected() {
        let err = load_banks(&[], 0).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn write_then_load_preserves_rows() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.csv");
        let bank = Bank {
            header: StringRecord::from(vec!["question", "answer"]),
            rows: vec![
                StringRecord::from(vec!["Q1", "1"]),
                StringRecord::from(vec!["Q2, with comma", "2"]),
            ],
        };

        write_bank(&out, &bank).unwrap();
        let reloaded = load_bank(&out).unwrap();
        assert_eq!(reloaded.header, bank.header);
        assert_eq!(reloaded.rows.len(), 2);
        assert_eq!(&reloaded.rows[1][0], "Q2, with comma");
    }

    #[test]
    fn write_bank_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let out = write_file(&dir, "out.csv", "stale,content\nx,y\nz,w\n");

        let bank = Bank {
            header: StringRecord::from(vec!["question"]),
            rows: vec![StringRecord::from(vec!["Q1"])],
        };
        write_bank(&out, &bank).unwrap();

        let contents = std::fs::read_to_string(&out).unwrap();
        assert_eq!(contents, "question\nQ1\n");
    }
}
