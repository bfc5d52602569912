use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, ConfigError};

/// Two-handed rock-paper-scissors against the computer.
#[derive(Debug, Parser)]
#[command(
    name = "jokempo",
    author,
    version,
    about = "Jokempo -1: pick two hands, keep one, beat the computer"
)]
pub struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override where player statistics are stored.
    #[arg(long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Seed the computer's draws for a reproducible session.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Use the line-based prompt even on an interactive terminal.
    #[arg(long)]
    pub plain: bool,

    /// Write structured JSON logs to this file (enables structured logging).
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Tracing level for structured logs (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Loads the config file (if any) and layers command-line overrides on top.
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match self.config.as_ref() {
            Some(path) => AppConfig::from_path(path)?,
            None => AppConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = self.data_file.as_ref() {
            config.data_file = Some(path.clone());
        }

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        if self.plain {
            config.plain = true;
        }

        if let Some(path) = self.log_file.as_ref() {
            config.logging.enable_structured = true;
            config.logging.file = Some(path.clone());
        }

        if let Some(level) = self.log_level.as_ref() {
            config.logging.tracing_level = level.clone();
        }
    }
}
