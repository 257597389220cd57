//! Session setup and initialization

use crate::environment::Environment;
use crate::events::Event;
use crate::indexer::IndexerClient;
use crate::runtime::start_deposit_poller;
use std::error::Error;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Requests an immediate poll, independent of the cadence timer
    pub sync_sender: mpsc::Sender<()>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Shutdown sender for poll budget completion
    pub max_polls_shutdown_sender: broadcast::Sender<()>,
    /// Indexer client
    pub indexer: IndexerClient,
    /// Cadence between scheduled polls
    pub poll_interval: Duration,
}

/// Sets up a polling worker session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the indexer client
/// 2. Sets up shutdown channel
/// 3. Starts the polling worker
/// 4. Returns session data for mode-specific handling
///
/// # Arguments
/// * `env` - Environment whose indexer to poll
/// * `poll_interval` - Cadence between scheduled polls
/// * `max_polls` - Optional poll budget, after which the session ends
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub async fn setup_session(
    env: Environment,
    poll_interval: Duration,
    max_polls: Option<u32>,
) -> Result<SessionData, Box<dyn Error>> {
    // Create indexer client
    let indexer_client = IndexerClient::new(env.clone());

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    // Start the polling worker
    let (event_receiver, sync_sender, join_handles, max_polls_shutdown_sender) =
        start_deposit_poller(
            indexer_client.clone(),
            shutdown_sender.subscribe(),
            env,
            poll_interval,
            max_polls,
        )
        .await;

    Ok(SessionData {
        event_receiver,
        sync_sender,
        join_handles,
        shutdown_sender,
        max_polls_shutdown_sender,
        indexer: indexer_client,
        poll_interval,
    })
}
