mod app;
mod config;
mod effects;
pub mod logging;
mod ui;

use anyhow::Context;

use crate::cli::Cli;

use app::run_event_loop;
use config::ClientConfig;

/// Resolve configuration, set up logging and run the client until the user quits.
pub fn run_app(cli: &Cli) -> anyhow::Result<()> {
    let config = ClientConfig::load(cli.config.as_deref())?.apply_cli(cli);
    let level = config.level_filter()?;
    logging::initialize(config.log_destination, level);

    let runner = effects::EffectRunner::new(config.fetch_settings())
        .with_context(|| format!("starting fetch engine for {}", config.base_url))?;
    run_event_loop(config.initial_state(), &runner)
}
