use anyhow::Result;
use clap::Parser;
use quizdedup::cli::{Cli, Commands};
use quizdedup::{commands, config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => commands::init::init_config(force),
        Commands::Dedup {
            inputs,
            output,
            key_column,
        } => {
            let defaults = config::load_config();
            let config =
                commands::dedup::DedupConfig::resolve(inputs, output, key_column, &defaults);
            commands::dedup::run(config)
        }
        Commands::Sample {
            input,
            count,
            output,
            seed,
        } => commands::sample::run(commands::sample::SampleConfig {
            input,
            count,
            output,
            seed,
        }),
        Commands::Validate {
            input,
            format,
            output,
        } => commands::validate::run(commands::validate::ValidateConfig {
            input,
            format,
            output,
        }),
    }
}
