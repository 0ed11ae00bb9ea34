use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod constants;
mod domain;
mod query;
mod state;
#[cfg(test)]
mod test_utils;
mod theme;
mod tui;
mod ui;
mod widgets;

use crate::domain::Network;
use crate::state::platform::AppPaths;
use crate::state::{App, AppConfig, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Older deployments read the key from this variable.
const LEGACY_API_KEY_ENV: &str = "REACT_APP_SEPOLIA_API_KEY";

const LOGO: &str = r"
 ___ ___  ___   ___ __     _         _
| __| _ \/ __| |_  )  \   (_)_ _  __| |_____ _____ _ _
| _||   / (__   / / () |  | | ' \/ _` / -_) \ / -_) '_|
|___|_|_\___| /___\__/   |_|_||_\__,_\___/_\_\___|_|
";

/// erc20-indexer - ERC-20 token balances in your terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Address to prefill the address field with
    #[arg(short, long)]
    address: Option<String>,

    /// Network to query
    #[arg(short, long, value_enum)]
    network: Option<Network>,

    /// JSON-RPC endpoint of the wallet provider (eth_accounts / eth_requestAccounts)
    #[arg(short, long, env = "WALLET_RPC_URL")]
    wallet_url: Option<String>,

    /// Alchemy API key
    #[arg(short = 'k', long, env = "ALCHEMY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Maximum metadata requests in flight
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Query the prefilled address right away
    #[arg(short, long)]
    query: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
    /// Write the effective configuration to the config file and print its path
    Config,
}

impl Cli {
    fn startup_options(self) -> StartupOptions {
        StartupOptions {
            address: self.address,
            network: self.network,
            wallet_url: self.wallet_url,
            api_key: self
                .api_key
                .or_else(|| std::env::var(LEGACY_API_KEY_ENV).ok()),
            concurrency: self.concurrency,
            query_on_start: self.query,
        }
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let mut cli = Cli::parse();
    if let Some(command) = cli.command.take() {
        return handle_command(command, cli.startup_options());
    }

    init_logging();

    let mut app = App::new(cli.startup_options())?;
    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    tracing::info!("exiting");
    result
}

fn handle_command(command: Commands, options: StartupOptions) -> Result<()> {
    match command {
        Commands::Version => {
            println!("{LOGO}");
            println!("erc20-indexer v{VERSION}");
            println!("ERC-20 token balances in your terminal");
        }
        Commands::Config => {
            let path = AppConfig::load().with_overrides(&options).save()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

/// Sends tracing output to the log file; the terminal belongs to the TUI.
fn init_logging() {
    let log_file = match AppPaths::new().log_file().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(Into::into)
    }) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("logging disabled: {e}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging disabled: {e}");
    }
}
