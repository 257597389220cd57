mod cli_messages;
mod config;
mod consts;
mod deposit;
mod environment;
mod error_classifier;
mod events;
mod indexer;
mod logging;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::polling;
use crate::deposit::DepositsResponse;
use crate::environment::Environment;
use crate::indexer::{Indexer, IndexerClient};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the deposit dashboard
    Start {
        /// Base URL of the deposit indexer. Saved for later runs.
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Seconds between scheduled polls. Defaults to 20.
        #[arg(long, value_name = "SECONDS")]
        poll_interval: Option<u64>,

        /// Stop after this many completed polls.
        #[arg(long, value_name = "COUNT")]
        max_polls: Option<u32>,

        /// Run without the terminal UI, logging events to the console.
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background color.
        #[arg(long)]
        no_background: bool,
    },
    /// Fetch the current deposits once and print them
    Fetch {
        /// Base URL of the deposit indexer.
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print the response as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Clear the saved configuration.
    Reset,
}

/// Pick the indexer to talk to: an explicit flag wins, then the saved
/// configuration, then the local default.
fn resolve_environment(api_url: Option<&str>, config_path: &Path) -> Environment {
    if let Some(url) = api_url {
        return Environment::custom(url);
    }
    if config_path.exists() {
        if let Ok(config) = Config::load_from_file(config_path) {
            return Environment::custom(config.api_base_url);
        }
    }
    Environment::default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            poll_interval,
            max_polls,
            headless,
            no_background,
        } => {
            let environment = resolve_environment(api_url.as_deref(), &config_path);
            // Remember an explicitly given URL for later runs.
            if let Some(url) = &api_url {
                if let Err(e) = Config::new(url.clone()).save(&config_path) {
                    print_cmd_warn!("Config", "Could not save configuration: {}", e);
                }
            }
            let poll_interval = match poll_interval {
                Some(0) => {
                    print_cmd_warn!(
                        "Polling",
                        "--poll-interval must be at least 1 second, using 1"
                    );
                    Duration::from_secs(1)
                }
                Some(secs) => Duration::from_secs(secs),
                None => polling::poll_interval(),
            };
            start(environment, poll_interval, max_polls, headless, !no_background).await
        }
        Command::Fetch { api_url, json } => {
            let environment = resolve_environment(api_url.as_deref(), &config_path);
            fetch(environment, json).await
        }
        Command::Reset => {
            println!("Clearing deposit tracker configuration...");
            Config::clear(&config_path)?;
            print_cmd_success!("Reset", "Configuration cleared");
            Ok(())
        }
    }
}

/// Starts the dashboard session.
///
/// # Arguments
/// * `environment` - The environment whose indexer to poll.
/// * `poll_interval` - Cadence between scheduled polls.
/// * `max_polls` - Optional poll budget, after which the session ends.
/// * `headless` - Log to the console instead of drawing the TUI.
/// * `with_background` - Whether the dashboard paints its background color.
async fn start(
    environment: Environment,
    poll_interval: Duration,
    max_polls: Option<u32>,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let session = setup_session(environment, poll_interval, max_polls).await?;
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}

/// One-shot fetch for scripts and quick checks. Exits non-zero when the
/// indexer cannot be reached or returns a malformed body.
async fn fetch(environment: Environment, json: bool) -> Result<(), Box<dyn Error>> {
    let client = IndexerClient::new(environment);
    match client.deposits().await {
        Ok(deposits) => {
            if json {
                let response = DepositsResponse { deposits };
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }
            if deposits.is_empty() {
                print_cmd_info!("Fetch", "No deposits found");
                return Ok(());
            }
            for deposit in &deposits {
                println!("{}", deposit);
            }
            print_cmd_success!(
                "Fetch",
                "{} deposits, head block {}",
                deposits.len(),
                deposits[0].block_number
            );
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Failed to fetch deposits", &e.to_string());
            Err(e.into())
        }
    }
}
