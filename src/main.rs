mod app;
mod backend;
mod cli;
mod components;
mod config;
mod error;
mod forms;
mod message;
mod model;
mod session;
mod state;
mod utils;
mod views;

use anyhow::Result;
use clap::Parser;

use crate::cli::CliArgs;
use crate::config::Config;

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = Config::from_cli(&CliArgs::parse())?;
    log::info!(
        "Starting for {} ({} MB upload limit)",
        config.clinician.title(),
        config.intake.max_file_bytes / utils::BYTES_PER_MB
    );

    app::run(config)?;
    Ok(())
}
