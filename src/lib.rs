//! timeyourwork library root.
//! Exposes the sheet store, the CLI parser, the high-level run() function
//! and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_to_string;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Create => cli::commands::create::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::Stop { .. } => cli::commands::stop::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Tasks => cli::commands::tasks::handle(cfg),
        Commands::Show => cli::commands::show::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(store) = &cli.store {
        cfg.store = expand_to_string(store);
    }
    if let Some(state) = &cli.state {
        cfg.state_db = expand_to_string(state);
    }
    if let Some(label) = &cli.key_label {
        cfg.key_label = label.clone();
    }
    if let Some(label) = &cli.value_label {
        cfg.value_label = label.clone();
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides (sheet, state DB, labels)
    apply_overrides(&cli, &mut cfg);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
