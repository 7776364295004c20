//! tstamp library root.
//! Exposes the CLI parser, the high-level run() function and the core modules
//! (record store, filters, diff report) for use in tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Environment variable holding the `env_logger` filter (default: `warn`).
pub const LOG_ENV: &str = "TSTAMP_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let result = match &cli.command {
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Rename { .. } => cli::commands::rename::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Timezone { .. } => cli::commands::timezone::handle(&cli.command, cfg),
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    // Unknown series and rename collisions end the command cleanly.
    match result {
        Err(e) if e.is_recoverable() => {
            ui::messages::warning(&e);
            Ok(())
        }
        other => other,
    }
}

pub fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_ENV, "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging();

    let mut cfg = Config::load()?;
    if let Some(custom_store) = &cli.store {
        cfg.store = Some(custom_store.clone());
    }

    dispatch(&cli, &cfg)
}
