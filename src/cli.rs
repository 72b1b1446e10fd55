use clap::{ArgAction, Args, Parser};
use eyre::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::commands::Commands;

/// 110 tokens in minor units, assigned to every account in the book
pub const DEFAULT_BALANCE: u128 = 110_000_000_000_000_000_000;

#[derive(Debug)]
pub struct BookConfig {
    global: GlobalOptions,
}

impl BookConfig {
    #[instrument(name = "config_load")]
    pub fn load() -> Result<(Self, Commands)> {
        let cli = BookCli::parse();

        let mut config_file = Figment::new()
            // first default config file layer
            .merge(Serialized::defaults(BookConfigFile::default()))
            // then read from envs
            .merge(Env::prefixed("ADDRBOOK_"));

        // Add configuration from file if specified

        if let Some(config_path) = &cli.config {
            config_file = config_file.merge(Toml::file(config_path));
        } else {
            config_file = config_file.merge(Toml::file("addrbook.toml"));
        }

        // Merge CLI arguments
        config_file = config_file.merge(Serialized::defaults(&cli));

        // Extract the final configuration
        let config_file: BookConfigFile = config_file.extract()?;

        info!(
            "loaded config, globals={:?}, command={:?}",
            config_file.global, cli.command
        );

        Ok((
            Self {
                global: config_file.global,
            },
            cli.command,
        ))
    }

    pub fn get_global(&self) -> &GlobalOptions {
        &self.global
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct BookConfigFile {
    #[serde(flatten)]
    global: GlobalOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GlobalOptions {
    /// Balance paired with every derived address, in minor units
    #[serde(with = "balance_string")]
    pub balance: u128,
    /// Indent the JSON output with four spaces instead of one line
    pub pretty: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            balance: DEFAULT_BALANCE,
            pretty: false,
        }
    }
}

///
/// CLI
///

#[derive(Debug, Parser, Serialize)]
#[command(version, about, long_about = None)]
struct BookCli {
    /// Path to a TOML config file, defaults to addrbook.toml
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, global = true)]
    config: Option<PathBuf>,

    // global options, flatten
    #[command(flatten)]
    #[serde(flatten)]
    global: GlobalArgs,

    // subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Serialize, Deserialize, Args)]
struct GlobalArgs {
    /// Balance assigned to every account, in minor units
    #[serde(skip_serializing_if = "Option::is_none", with = "opt_balance_string")]
    #[arg(short, long, global = true, value_parser = parse_balance)]
    balance: Option<u128>,
    /// Pretty-print the JSON output
    // only serialized when the flag was actually passed, otherwise the
    // CLI layer would mask pretty = true from the env/TOML layers
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pretty: bool,
}

fn parse_balance(value: &str) -> Result<u128, String> {
    value
        .parse::<u128>()
        .map_err(|e| format!("invalid balance: {e}"))
}

/// Balances travel as decimal strings through config layers, TOML and the
/// figment env provider cannot carry integers above i64::MAX.
mod balance_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

mod opt_balance_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<u128>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(balance) => serializer.serialize_str(&balance.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u128>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| s.parse().map_err(D::Error::custom)).transpose()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_balance_is_the_genesis_constant() {
        let global = GlobalOptions::default();
        assert_eq!(global.balance, 110_000_000_000_000_000_000);
        assert!(!global.pretty);
    }

    #[test]
    fn balance_round_trips_as_string() {
        let global = GlobalOptions::default();
        let json = serde_json::to_string(&global).unwrap();
        assert!(json.contains("\"110000000000000000000\""));
        let back: GlobalOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.balance, global.balance);
    }

    fn cli(global: GlobalArgs) -> BookCli {
        BookCli {
            config: None,
            global,
            command: Commands::Eth(crate::commands::EthArgs {
                count: 0,
                out: None,
            }),
        }
    }

    #[test]
    fn config_file_layer_overrides_defaults() {
        let config: BookConfigFile = Figment::new()
            .merge(Serialized::defaults(BookConfigFile::default()))
            .merge(Toml::string("pretty = true\nbalance = \"42\""))
            .merge(Serialized::defaults(&cli(GlobalArgs {
                balance: None,
                pretty: false,
            })))
            .extract()
            .unwrap();

        // an absent --pretty must not mask the config file layer
        assert!(config.global.pretty);
        assert_eq!(config.global.balance, 42);
    }

    #[test]
    fn cli_layer_overrides_config_file() {
        let config: BookConfigFile = Figment::new()
            .merge(Serialized::defaults(BookConfigFile::default()))
            .merge(Toml::string("balance = \"42\""))
            .merge(Serialized::defaults(&cli(GlobalArgs {
                balance: Some(7),
                pretty: true,
            })))
            .extract()
            .unwrap();

        assert!(config.global.pretty);
        assert_eq!(config.global.balance, 7);
    }
}
