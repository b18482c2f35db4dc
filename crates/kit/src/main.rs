// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use sui_hero_kit::entities::{Hero, parse_hero_content};
use sui_hero_kit::logging;
use sui_hero_kit::rpc::{SuiRpcClient, get_hero, get_hero_sword_ids, get_transaction_changes};
use sui_hero_kit::summary::{load_transaction_file, summarize_transaction};
use sui_hero_kit::types::ObjectId;
use sui_hero_kit_config::{Args, KitConfig};

#[derive(Parser, Debug)]
#[command(name = "sui-hero-kit", version, about = "Query and parse hero bootcamp objects")]
struct Cli {
    #[command(flatten)]
    args: Args,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a hero and the ids of the swords attached to it
    Hero {
        /// Object id of the hero
        id: ObjectId,
    },
    /// Fetch a transaction and summarize created objects and SUI balance changes
    Tx {
        digest: String,
        /// Also report the SUI balance change of this address
        #[arg(long)]
        recipient: Option<String>,
    },
    /// Summarize a transaction response saved as JSON
    ParseTx {
        file: PathBuf,
        #[arg(long)]
        sender: String,
        #[arg(long)]
        recipient: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeroOutput {
    hero: Hero,
    sword_ids: Vec<ObjectId>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = KitConfig::load(&cli.args.env_file)
        .with_context(|| format!("Failed to load configuration from '{}'", cli.args.env_file))?;
    let _log_guard = logging::init(&config.log).context("Failed to initialize logging")?;

    tracing::info!(
        network = %config.sui.network,
        package_id = %config.package.package_id,
        "Loaded configuration"
    );

    match cli.command {
        Command::Hero { id } => {
            let client = SuiRpcClient::from_config(&config.sui)?;
            let (response, sword_ids) = futures::try_join!(
                get_hero(&client, &id),
                get_hero_sword_ids(&client, &config.package, &id)
            )
            .with_context(|| format!("Failed to fetch hero {id}"))?;

            let hero = parse_hero_content(&response)
                .with_context(|| format!("Failed to parse hero {id}"))?;
            print_json(&HeroOutput { hero, sword_ids })
        }
        Command::Tx { digest, recipient } => {
            let client = SuiRpcClient::from_config(&config.sui)?;
            let response = get_transaction_changes(&client, &digest)
                .await
                .with_context(|| format!("Failed to fetch transaction {digest}"))?;

            let summary =
                summarize_transaction(&response, &config.package, None, recipient.as_deref())
                    .with_context(|| format!("Failed to summarize transaction {digest}"))?;
            print_json(&summary)
        }
        Command::ParseTx {
            file,
            sender,
            recipient,
        } => {
            let response = load_transaction_file(&file)?;
            let summary = summarize_transaction(
                &response,
                &config.package,
                Some(&sender),
                recipient.as_deref(),
            )
            .with_context(|| format!("Failed to summarize {}", file.display()))?;
            print_json(&summary)
        }
    }
}
