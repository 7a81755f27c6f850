//! Optional quizdedup.toml configuration.
//!
//! Holds the input and output paths plus the dedup key column, so they can
//! be changed without editing source. Missing or malformed config files fall
//! back to defaults with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "quizdedup.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizdedupConfig {
    /// Input banks, merged in order. The first file's header is kept.
    pub inputs: Vec<PathBuf>,

    /// Where the deduplicated bank is written.
    pub output: PathBuf,

    /// Zero-based column holding the question text.
    pub key_column: usize,
}

impl Default for QuizdedupConfig {
    fn default() -> Self {
        Self {
            inputs: vec![
                PathBuf::from("questions.csv"),
                PathBuf::from("questions2.csv"),
            ],
            output: PathBuf::from("questions_dedup.csv"),
            key_column: 0,
        }
    }
}

/// Pure function to parse and validate config from TOML string
pub(crate) fn parse_config(contents: &str) -> Result<QuizdedupConfig, String> {
    toml::from_str(contents).map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
}

fn try_load_config_from_path(config_path: &Path) -> Option<QuizdedupConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Find a config file in the current directory or its ancestors.
pub fn load_config() -> QuizdedupConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return QuizdedupConfig::default();
        }
    };

    std::iter::successors(Some(current), |dir| dir.parent().map(Path::to_path_buf))
        .take(MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No config file found. Using default config.");
            QuizdedupConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_question_bank_files() {
        let config = QuizdedupConfig::default();
        assert_eq!(
            config.inputs,
            vec![
                PathBuf::from("questions.csv"),
                PathBuf::from("questions2.csv")
            ]
        );
        assert_eq!(config.output, PathBuf::from("questions_dedup.csv"));
        assert_eq!(config.key_column, 0);
    }

    #[test]
    fn parses_full_config() {
        let contents = indoc! {r#"
            inputs = ["bank_a.csv", "bank_b.csv", "bank_c.csv"]
            output = "merged.csv"
            key_column = 1
        "#};
        let config = parse_config(contents).unwrap();
        assert_eq!(config.inputs.len(), 3);
        assert_eq!(config.output, PathBuf::from("merged.csv"));
        assert_eq!(config.key_column, 1);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = parse_config(r#"output = "clean.csv""#).unwrap();
        assert_eq!(config.output, PathBuf::from("clean.csv"));
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.key_column, 0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_config("keycolumn = 3").unwrap_err();
        assert!(err.contains("Failed to parse quizdedup.toml"));
    }
}
