//! obralog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Project { action } => cli::commands::project::handle(action, cfg),
        Commands::Worker { action } => cli::commands::worker::handle(action, cfg),
        Commands::Parts { action } => cli::commands::parts::handle(action, cfg),
        Commands::Expense { action } => cli::commands::expense::handle(action, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // in test mode the user's config file is neither read nor written
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
