//! Simplified runtime for coordinating the polling worker

use crate::environment::Environment;
use crate::events::Event;
use crate::indexer::IndexerClient;
use crate::workers::core::WorkerConfig;
use crate::workers::poller::DepositPoller;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the deposit polling worker
pub async fn start_deposit_poller(
    indexer: IndexerClient,
    shutdown: broadcast::Receiver<()>,
    environment: Environment,
    poll_interval: Duration,
    max_polls: Option<u32>,
) -> (
    mpsc::Receiver<Event>,
    mpsc::Sender<()>,
    Vec<JoinHandle<()>>,
    broadcast::Sender<()>,
) {
    let mut config = WorkerConfig::new(environment);
    config.poll_interval = poll_interval;
    config.max_polls = max_polls;
    let (event_sender, event_receiver) =
        mpsc::channel::<Event>(crate::consts::cli_consts::EVENT_QUEUE_SIZE);

    // Manual sync requests from the interface
    let (sync_sender, sync_receiver) =
        mpsc::channel::<()>(crate::consts::cli_consts::SYNC_QUEUE_SIZE);

    // Create a separate shutdown sender for poll budget completion
    let (shutdown_sender, _) = broadcast::channel(1);

    let poller = DepositPoller::new(
        Arc::new(indexer),
        event_sender,
        config,
        shutdown_sender.clone(),
    );

    let join_handles = poller.run(shutdown, sync_receiver).await;
    (event_receiver, sync_sender, join_handles, shutdown_sender)
}
