//! profilefmt CLI
//!
//! Command-line front end for the profile display formatter.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use profilefmt_core::PresenterConfig;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        format,
        command,
    } = Args::parse();

    let config = PresenterConfig::load(config.as_deref()).context("Failed to load configuration")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("profilefmt started");

    Cli::new(config, renderer, format).run(command)
}
