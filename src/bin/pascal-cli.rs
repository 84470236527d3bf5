use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pascal_config::{ClientConfig, EndPoint};
use pascal_primitives::AccountNumber;
use pascal_rpc::{JsonObject, PascalClient, RichApi};
use std::fmt::Debug;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pascal-cli", about = "Query a PascalCoin node over JSON-RPC")]
struct Cli {
    /// Path to a TOML client configuration.
    #[arg(long, value_name = "PATH", env = "PASCAL_CONFIG")]
    config: Option<PathBuf>,

    /// Node endpoint as `host`, `host:port` or `scheme://host:port`.
    /// Repeatable; replaces the endpoints of `--config`.
    #[arg(long = "endpoint", value_name = "ENDPOINT")]
    endpoints: Vec<EndPoint>,

    /// Print the node's JSON instead of the parsed entities.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Show the node status.
    Status,
    /// Print the number of blocks.
    BlockCount,
    /// List the newest blocks.
    Blocks {
        /// How many blocks to list.
        #[arg(long, default_value_t = 10)]
        last: u64,
    },
    /// Show one account, by id or `id-checksum`.
    Account {
        account: AccountNumber,
    },
    /// List the node's peer connections.
    Connections,
}

impl Cli {
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ClientConfig::default(),
        };
        if !self.endpoints.is_empty() {
            config.endpoints = self.endpoints.clone();
        }
        if config.endpoints.is_empty() {
            config.endpoints.push(EndPoint::with_host("127.0.0.1")?);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.client_config()?;
    info!(
        target: "pascal",
        endpoints = ?config.endpoints.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "using endpoints"
    );

    let client = PascalClient::new(&config)?;
    run(&cli.command, &client.rich_api(&[]), cli.json).await
}

async fn run(command: &Command, rich: &RichApi, json: bool) -> Result<()> {
    match command {
        Command::Status => {
            let status = rich.node().status().await?;
            print_entity(&status, &status.raw, json)
        }
        Command::BlockCount => {
            println!("{}", rich.block().count().await?);
            Ok(())
        }
        Command::Blocks { last } => {
            for block in rich.block().list_last(*last).await? {
                print_entity(&block, &block.raw, json)?;
            }
            Ok(())
        }
        Command::Account { account } => {
            let account = rich.account().find(*account).await?;
            print_entity(&account, &account.raw, json)
        }
        Command::Connections => {
            for connection in rich.node().connections().await? {
                print_entity(&connection, &connection.raw, json)?;
            }
            Ok(())
        }
    }
}

fn print_entity<T: Debug>(entity: &T, raw: &JsonObject, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(raw)?);
    } else {
        println!("{entity:#?}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,pascal=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
