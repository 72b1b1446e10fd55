use eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::BookConfig;

pub mod book;
pub mod cli;
pub mod commands;
pub mod deriver;
pub mod error;
pub mod seed;

fn main() -> Result<()> {
    // logs go to stderr, stdout carries nothing but the rendered book
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (config, command) = BookConfig::load()?;
    command.execute(&config)?;
    Ok(())
}
