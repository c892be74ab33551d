use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use todo_state::app::settings::{self, Settings};
use todo_state::runner::logging::{choose_filter, init_logging};
use todo_state::runner::{run_lines, LoopOptions, Session};

/// Drive an in-memory to-do list from action lines (see `help`).
#[derive(Debug, Parser)]
#[command(name = "todo", version, about)]
struct Cli {
    /// Settings file to use instead of the platform default.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read actions from this file instead of stdin.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Print list views as JSON.
    #[arg(long)]
    json: bool,

    /// Exit with an error at the first failing action.
    #[arg(long)]
    strict: bool,

    /// Hide item ids in text views.
    #[arg(long)]
    no_ids: bool,

    /// `tracing` filter directive (overrides RUST_LOG and settings).
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,

    /// Seed for the `random` action.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default settings to the settings path and exit.
    #[arg(long)]
    init_config: bool,
}

fn load(cli: &Cli) -> anyhow::Result<Settings> {
    let loaded = match &cli.config {
        Some(path) => settings::load_settings_from(path),
        None => settings::load_settings(),
    };
    loaded.context("failed to load settings")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => {
                settings::save_settings_to(&Settings::default(), path)?;
                path.clone()
            }
            None => settings::save_settings(&Settings::default())?,
        };
        println!("Wrote default settings to {}", path.display());
        return Ok(());
    }

    let mut settings = load(&cli)?;
    if cli.no_ids {
        settings.show_ids = false;
    }

    let env_filter = std::env::var("RUST_LOG").ok();
    let filter = choose_filter(
        cli.log_filter.as_deref(),
        env_filter.as_deref(),
        settings.log_filter.as_deref(),
    );
    let _guard = init_logging(&filter, settings.log_dir.as_deref())?;

    let opts = LoopOptions {
        strict: cli.strict,
        json: cli.json || settings.json_output,
    };
    let mut session = Session::new(settings, cli.seed);
    let stdout = io::stdout();
    let stderr = io::stderr();

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run_lines(
                &mut session,
                BufReader::new(file),
                &mut stdout.lock(),
                &mut stderr.lock(),
                opts,
            )?
        }
        None => run_lines(
            &mut session,
            io::stdin().lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
            opts,
        )?,
    };
    info!(
        lines = summary.lines,
        commands = summary.commands,
        errors = summary.errors,
        "session finished"
    );
    Ok(())
}
