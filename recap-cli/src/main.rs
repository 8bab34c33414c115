mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use cli_modes::{calendar_mode, list_mode, moodmap_mode, tags_mode, url_mode};
use recap_core::{Clock, Config, FixedClock, Recapz, SystemClock};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("recap: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RECAP_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("RECAP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(path) = &cli.entries {
        config.entries_file = path.clone();
    }

    let clock: Box<dyn Clock> = match cli.now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };
    let mut recapz = Recapz::with_config(config, clock);

    let short_mode = matches!(cli.command, Command::List { short: true, .. });
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: recapz.config.date_format.clone(),
        use_color: cli.color.use_color(),
        short_mode,
    }));

    // The url command only formats flags, no need to touch the cache.
    let errors = match &cli.command {
        Command::Url { .. } => Vec::new(),
        _ => recapz.store.hydrate(),
    };
    debug!(
        entries = recapz.store.entries().len(),
        today = %recapz.today(),
        "ready"
    );

    match &cli.command {
        Command::List { filters, .. } => list_mode(filters, &renderer, &recapz),
        Command::Tags { counts } => tags_mode(*counts, &renderer, &recapz),
        Command::Moodmap { days } => moodmap_mode(*days, &renderer, &recapz),
        Command::Calendar { month } => calendar_mode(*month, &renderer, &recapz),
        Command::Url { filters } => url_mode(filters, &renderer),
    }

    if !errors.is_empty() {
        renderer.print_errors(&errors);
    }
    Ok(())
}
