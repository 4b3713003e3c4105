//! walkcal library root.
//! Exposes the schedule builder, the CLI parser, the high-level run()
//! function and the supporting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(cli, cfg),
        Commands::View { .. } => commands::view::handle(cli, cfg),
        Commands::Nav { .. } => commands::nav::handle(cli, cfg),
        Commands::EndTime { .. } => commands::end_time::handle(cli),
        Commands::Export { .. } => commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, from --config or the standard location
    let mut cfg = Config::load_from(&commands::config_path(&cli))?;

    // 3️⃣ apply the snapshot override from the command line
    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
