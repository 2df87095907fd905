use anyhow::{Context, Result};
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use gridcal::storage::{self, Config, EventStore, MemoryStore};

mod cli;
use cli::{CliMode, USAGE, parse_args, run_agenda};
mod tui;
use tui::{run_tui, seed_sample_events};

fn main() -> Result<()> {
    let args = match parse_args(std::env::args().skip(1), Local::now().date_naive()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if args.mode == CliMode::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::load_or_create().context("failed to load configuration")?;
    let _guard = setup_logging(&config);

    let mut store = open_store(&config, args.ephemeral);

    if args.sample {
        match seed_sample_events(&mut store) {
            Ok(0) => tracing::info!("Store not empty, skipping sample events"),
            Ok(count) => tracing::info!("Seeded {} sample events", count),
            Err(e) => tracing::error!("Failed to seed sample events: {}", e),
        }
    }

    match args.mode {
        CliMode::Agenda(date) => run_agenda(date, store.list()).context("failed to print agenda"),
        _ => run_tui(&config, store).context("terminal UI failed"),
    }
}

/// Opens the configured store, falling back to an in-memory one so the
/// planner still starts when the database cannot be opened.
fn open_store(config: &Config, ephemeral: bool) -> EventStore {
    match storage::open_event_store(&config.storage, ephemeral) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "Could not open {}: {}; changes will not be saved",
                config.storage.database_path.display(),
                e
            );
            EventStore::load(Box::new(MemoryStore::new()), config.storage.key.clone())
        }
    }
}

fn setup_logging(config: &Config) -> WorkerGuard {
    let log_dir = Config::app_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "gridcal.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::info!("gridcal started");
    guard
}
