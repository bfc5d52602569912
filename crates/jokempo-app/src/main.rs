#![deny(warnings)]

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use jokempo_app::logging::init_logging;
use jokempo_app::prompt::menus_supported;
use jokempo_app::{Cli, LinePrompt, Prompt, Session, SessionError, SessionReport, TerminalPrompt};
use jokempo_bot::HeuristicPolicy;
use jokempo_core::game::store::StatisticsStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = cli.resolve_config()?;
    config.validate().context("validating command-line overrides")?;

    let data_file = config.resolved_data_file();
    let log_file = config.resolved_log_file(&data_file);
    let _logging_guard = init_logging(&config.logging, &log_file)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, data_file = %data_file.display(), "starting session");

    let store = StatisticsStore::new(&data_file);
    let rng = StdRng::seed_from_u64(seed);
    let plain = config.plain
        || !menus_supported(io::stdin().is_terminal(), io::stderr().is_terminal());

    let report = if plain {
        let mut prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
        run_session(&mut prompt, rng, store)?
    } else {
        let mut prompt = TerminalPrompt::new();
        run_session(&mut prompt, rng, store)?
    };
    info!(
        rounds = report.rounds_played,
        players = report.players.len(),
        "session finished"
    );
    Ok(())
}

fn run_session(
    prompt: &mut dyn Prompt,
    rng: StdRng,
    store: StatisticsStore,
) -> Result<SessionReport, SessionError> {
    Session::new(prompt, HeuristicPolicy::new(), rng, store).run()
}
