//! Explorer-CLI: query the Meridian explorer data layer from a terminal.
//!
//! Every subcommand maps to one facade operation and prints the normalized
//! view model as pretty JSON, exactly what a page would render.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use explorer_data::{ExplorerConfig, ExplorerService, HttpNodeApi, ParsedAccountId};

/// Explorer-CLI: Meridian explorer data layer front end
#[derive(Parser, Debug)]
#[command(name = "explorer-cli")]
#[command(about = "Query blocks, epochs, transactions, accounts, and pools")]
struct Args {
    /// Node REST API base URL (overrides NODE_URL)
    #[arg(short, long)]
    node_url: Option<String>,

    /// Serve deterministic stub data instead of querying the node
    #[arg(long)]
    stub: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Blockchain summary: current epoch, aggregates, protocol constants
    Chain,
    /// One block by composite id or SID
    Block {
        /// Block id, `epoch:creator:index` or `shard:height`
        id: String,
    },
    /// Latest blocks of a shard
    Blocks {
        /// Shard to list
        #[arg(short, long, default_value = "0")]
        shard: String,
        /// Page, 1-based
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Rows per page (clamped to 10..=100)
        #[arg(short, long)]
        rows: Option<u32>,
    },
    /// Aggregated finalization proof of a block
    Afp {
        /// Block id, composite or SID
        id: String,
    },
    /// One epoch with derived fields
    Epoch {
        /// Epoch id, or `current`
        id: String,
    },
    /// One transaction by display hash
    Tx {
        /// Transaction hash
        hash: String,
    },
    /// One account by (optionally shard-qualified) id
    Account {
        /// Account id, `shard:address` or a bare address
        id: String,
    },
    /// Latest transactions of an account
    AccountTxs {
        /// Account id, `shard:address` or a bare address
        id: String,
    },
    /// One validator pool
    Pool {
        /// Pool id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = ExplorerConfig::from_env();
    if let Some(node_url) = args.node_url {
        config.node_url = node_url;
    }
    if args.stub {
        config.global_stub = true;
        config.entity_stub = true;
    }

    tracing::debug!(
        "[explorer-cli] node {} (stub: {})",
        config.node_url,
        config.global_stub
    );

    let api = HttpNodeApi::new(config.node_url.clone())?;
    let service = ExplorerService::new(api, config);

    match args.command {
        Command::Chain => print_json(&service.blockchain_data().await?),
        Command::Block { id } => print_json(&service.block_by_id(&id).await?),
        Command::Blocks { shard, page, rows } => {
            print_json(&service.blocks_by_shard(&shard, page, rows).await?)
        }
        Command::Afp { id } => print_json(&service.aggregated_finalization_proof(&id).await?),
        Command::Epoch { id } => {
            let id = if id == "current" {
                service.current_epoch().await?.id
            } else {
                id.parse()?
            };
            print_json(&service.epoch_by_id(id).await?)
        }
        Command::Tx { hash } => print_json(&service.transaction_by_hash(&hash).await?),
        Command::Account { id } => print_json(&service.account(&id, false).await?),
        Command::AccountTxs { id } => {
            let parsed = ParsedAccountId::parse(&id);
            print_json(
                &service
                    .account_transactions(&parsed.shard, &parsed.address)
                    .await?,
            )
        }
        Command::Pool { id } => print_json(&service.pool_by_id(&id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
