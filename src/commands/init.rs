use crate::config::CONFIG_FILE_NAME;
use anyhow::Result;
use std::path::PathBuf;

pub(crate) const DEFAULT_CONFIG: &str = r#"# Quizdedup configuration

# Input banks, merged in the order listed. The first file's header is kept.
inputs = ["questions.csv", "questions2.csv"]

# Where the deduplicated bank is written.
output = "questions_dedup.csv"

# Zero-based column holding the question text.
key_column = 0
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
