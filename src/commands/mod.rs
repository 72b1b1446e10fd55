use std::{fs, path::PathBuf};

use clap::{Args, Subcommand};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    book::{build_book, render},
    cli::BookConfig,
    deriver::{AddressDeriver, EthDeriver, Sr25519Deriver},
    seed::{self, Seed},
};

#[derive(Debug, Serialize, Deserialize, Args)]
#[command(next_help_heading = "Eth Options")]
pub struct EthArgs {
    /// Number of index-derived accounts on top of the well-known prefix
    #[arg(short = 'n', long, default_value_t = seed::DEFAULT_ETH_COUNT)]
    pub count: u32,
    /// Write the book to a file instead of stdout
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Args)]
#[command(next_help_heading = "Substrate Options")]
pub struct SubstrateArgs {
    /// Number of //Sender/{i} accounts on top of //Alice and //Bob
    #[arg(short = 'n', long, default_value_t = seed::DEFAULT_SUBSTRATE_COUNT)]
    pub count: u32,
    /// SS58 address format prefix, 42 is the substrate generic network
    #[arg(long, default_value_t = 42)]
    pub ss58_prefix: u16,
    /// Write the book to a file instead of stdout
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Subcommand)]
pub enum Commands {
    /// Build the funded-accounts book for an EVM chain
    Eth(EthArgs),
    /// Build the funded-accounts book for a substrate chain
    Substrate(SubstrateArgs),
}

impl Commands {
    pub fn execute(&self, config: &BookConfig) -> Result<()> {
        let global = config.get_global();

        let (seeds, deriver): (Vec<Seed>, Box<dyn AddressDeriver>) = match self {
            Commands::Eth(args) => {
                info!("building eth address book, count={}", args.count);
                (seed::eth_seeds(args.count), Box::new(EthDeriver))
            }
            Commands::Substrate(args) => {
                info!(
                    "building substrate address book, count={}, ss58_prefix={}",
                    args.count, args.ss58_prefix
                );
                (
                    seed::substrate_seeds(args.count),
                    Box::new(Sr25519Deriver::new().with_ss58_prefix(args.ss58_prefix)),
                )
            }
        };

        let book = build_book(deriver.as_ref(), &seeds, global.balance)?;
        let rendered = render(&book, global.pretty)?;

        match self.out() {
            Some(path) => {
                fs::write(path, rendered.as_bytes())
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                info!("wrote {} entries to {}", book.len(), path.display());
            }
            None => println!("{rendered}"),
        }

        Ok(())
    }

    fn out(&self) -> Option<&PathBuf> {
        match self {
            Commands::Eth(args) => args.out.as_ref(),
            Commands::Substrate(args) => args.out.as_ref(),
        }
    }
}
