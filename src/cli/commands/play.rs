//! Play command - interactive games at the terminal

use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    ai::Difficulty,
    cli::{config::SessionConfig, session::Session},
    game::Mark,
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play interactively against a friend or the AI")]
pub struct PlayArgs {
    /// AI strength (overrides the config file)
    #[arg(long, short = 'd', value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Mark the AI plays in human-vs-AI games (`x` or `o`)
    #[arg(long)]
    pub ai_mark: Option<Mark>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON session configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Disable the "thinking" spinner
    #[arg(long)]
    pub no_spinner: bool,
}

/// Merge the config file (if any) with command-line overrides
pub fn resolve_config(args: &PlayArgs) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(difficulty) = args.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(mark) = args.ai_mark {
        config = config.with_ai_mark(mark);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.no_spinner {
        config = config.with_spinner(false);
    }

    Ok(config)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    log::info!("session config: {config:?}");

    let stdin = io::stdin();
    let stdout = BufWriter::new(io::stdout());
    Session::new(&config, stdin.lock(), stdout).run()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(&PlayArgs::default()).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "difficulty": "easy", "ai_mark": "X", "seed": 1 }}"#).unwrap();

        let args = PlayArgs {
            difficulty: Some(Difficulty::Medium),
            seed: Some(5),
            config: Some(file.path().to_path_buf()),
            no_spinner: true,
            ..PlayArgs::default()
        };
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.ai_mark, Mark::X);
        assert_eq!(config.seed, Some(5));
        assert!(!config.spinner);
    }
}
