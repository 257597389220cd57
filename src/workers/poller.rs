//! Deposit polling worker
//!
//! Polls the indexer for deposit records on a fixed cadence and on manual
//! sync requests. The cadence timer lives inside the worker task for the
//! whole session; nothing outside the worker can re-arm it. Polls may
//! overlap, so each one carries a strictly increasing sequence number and
//! consumers keep only outcomes newer than the last one they applied.

use super::core::{EventSender, WorkerConfig};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, EventType, PollOutcome, PollTrigger};
use crate::indexer::Indexer;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Polling worker that owns the fetch cadence for one session.
pub struct DepositPoller {
    indexer: Arc<dyn Indexer>,
    event_sender: EventSender,
    config: WorkerConfig,
    error_classifier: ErrorClassifier,
    next_seq: u64,
    polls_issued: u32,
    polls_completed: u32,
    shutdown_sender: broadcast::Sender<()>,
}

impl DepositPoller {
    pub fn new(
        indexer: Arc<dyn Indexer>,
        event_sender: mpsc::Sender<Event>,
        config: WorkerConfig,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            indexer,
            event_sender: EventSender::new(event_sender),
            config,
            error_classifier: ErrorClassifier::new(),
            next_seq: 0,
            polls_issued: 0,
            polls_completed: 0,
            shutdown_sender,
        }
    }

    /// Start the worker
    pub async fn run(
        mut self,
        mut shutdown: broadcast::Receiver<()>,
        mut sync_requests: mpsc::Receiver<()>,
    ) -> Vec<JoinHandle<()>> {
        let mut join_handles = Vec::new();

        self.event_sender
            .send_poller_event(
                format!(
                    "Polling {} every {}s",
                    self.config.environment.api_base_url(),
                    self.config.poll_interval.as_secs()
                ),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        // Main work loop
        let worker_handle = tokio::spawn(async move {
            // Completed fetches come back through this channel so the worker
            // can forward them in arrival order and count them.
            let (done_sender, mut completions) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

            let mut interval = tokio::time::interval(self.config.poll_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    // First tick completes immediately, giving the poll-on-start.
                    _ = interval.tick() => {
                        self.issue_poll(PollTrigger::Scheduled, &done_sender).await;
                    }
                    Some(()) = sync_requests.recv() => {
                        self.issue_poll(PollTrigger::Manual, &done_sender).await;
                    }
                    Some(event) = completions.recv() => {
                        if self.handle_completion(event).await {
                            break;
                        }
                    }
                }
            }
            // Dropping the completion channel discards in-flight fetches.
        });
        join_handles.push(worker_handle);

        join_handles
    }

    /// Start one fetch without waiting for it. The cadence timer keeps its
    /// schedule regardless of how long the round trip takes.
    async fn issue_poll(&mut self, trigger: PollTrigger, done_sender: &mpsc::Sender<Event>) {
        if let Some(max) = self.config.max_polls {
            if self.polls_issued >= max {
                return;
            }
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.polls_issued += 1;

        let log_level = match trigger {
            // Manual syncs are user-initiated, keep them visible
            PollTrigger::Manual => LogLevel::Info,
            PollTrigger::Scheduled => LogLevel::Debug,
        };
        self.event_sender
            .send_poller_event(
                format!("Fetching deposits ({})", trigger),
                EventType::Refresh,
                log_level,
            )
            .await;

        let indexer = self.indexer.clone();
        let classifier = self.error_classifier;
        let done = done_sender.clone();
        tokio::spawn(async move {
            let event = match indexer.deposits().await {
                Ok(deposits) => {
                    debug!("Fetch {} returned {} deposits", seq, deposits.len());
                    let msg = match deposits.first() {
                        Some(latest) => format!(
                            "Synced {} deposits, head block {}",
                            deposits.len(),
                            latest.block_number
                        ),
                        None => "Synced 0 deposits".to_string(),
                    };
                    Event::poll_success(msg, PollOutcome::success(seq, trigger, deposits))
                }
                Err(e) => {
                    warn!("Fetch {} failed: {}", seq, e);
                    Event::poll_failure(
                        format!("Failed to fetch deposits: {}", e),
                        classifier.classify_fetch_error(&e),
                        PollOutcome::failure(seq, trigger),
                    )
                }
            };
            let _ = done.send(event).await;
        });
    }

    /// Forward a completed poll and count it. Returns true when the worker
    /// should exit because the poll budget is spent.
    async fn handle_completion(&mut self, event: Event) -> bool {
        self.event_sender.send_event(event).await;
        self.polls_completed += 1;

        if let Some(max) = self.config.max_polls {
            if self.polls_completed >= max {
                // Give a brief moment for the final sync message to be
                // processed before triggering shutdown
                tokio::time::sleep(Duration::from_millis(100)).await;

                self.event_sender
                    .send_poller_event(
                        format!("Completed {} polls, shutting down", self.polls_completed),
                        EventType::Shutdown,
                        LogLevel::Info,
                    )
                    .await;

                let _ = self.shutdown_sender.send(());
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::SYNC_QUEUE_SIZE;
    use crate::deposit::Deposit;
    use crate::environment::Environment;
    use crate::indexer::MockIndexer;
    use crate::indexer::error::IndexerError;
    use tokio::time::timeout;

    fn sample_deposit(block_number: u64) -> Deposit {
        Deposit {
            block_number,
            block_timestamp: "2024-01-01T00:00:00Z".to_string(),
            fee: "0.01".to_string(),
            hash: format!("0x{:x}", block_number),
            pubkey: None,
        }
    }

    struct PollerHarness {
        events: mpsc::Receiver<Event>,
        sync_requests: mpsc::Sender<()>,
        session_shutdown: broadcast::Sender<()>,
        completion_shutdown: broadcast::Receiver<()>,
        handles: Vec<JoinHandle<()>>,
    }

    async fn spawn_poller(
        mock: MockIndexer,
        poll_interval: Duration,
        max_polls: Option<u32>,
    ) -> PollerHarness {
        let mut config = WorkerConfig::new(Environment::default());
        config.poll_interval = poll_interval;
        config.max_polls = max_polls;

        let (event_sender, events) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
        let (sync_requests, sync_receiver) = mpsc::channel::<()>(SYNC_QUEUE_SIZE);
        let (session_shutdown, _) = broadcast::channel(1);
        let (completion_sender, completion_shutdown) = broadcast::channel(1);

        let poller = DepositPoller::new(Arc::new(mock), event_sender, config, completion_sender);
        let handles = poller.run(session_shutdown.subscribe(), sync_receiver).await;

        PollerHarness {
            events,
            sync_requests,
            session_shutdown,
            completion_shutdown,
            handles,
        }
    }

    /// Receive events until one carries a poll outcome, or time out.
    async fn next_outcome(events: &mut mpsc::Receiver<Event>) -> Event {
        loop {
            let event = timeout(Duration::from_secs(2), events.recv())
                .await
                .expect("timed out waiting for poll outcome")
                .expect("event channel closed");
            if event.outcome.is_some() {
                return event;
            }
        }
    }

    #[tokio::test]
    async fn first_poll_fires_immediately() {
        let mut mock = MockIndexer::new();
        mock.expect_deposits()
            .returning(|| Ok(vec![sample_deposit(42)]));

        // Long interval so only the immediate first tick polls.
        let mut harness = spawn_poller(mock, Duration::from_secs(60), None).await;

        let event = next_outcome(&mut harness.events).await;
        assert_eq!(event.event_type, EventType::Success);
        let outcome = event.outcome.unwrap();
        assert_eq!(outcome.seq, 0);
        assert_eq!(outcome.trigger, PollTrigger::Scheduled);
        assert_eq!(outcome.deposits.unwrap()[0].block_number, 42);

        let _ = harness.session_shutdown.send(());
    }

    #[tokio::test]
    async fn manual_sync_polls_between_ticks() {
        let mut mock = MockIndexer::new();
        mock.expect_deposits().returning(|| Ok(vec![]));

        let mut harness = spawn_poller(mock, Duration::from_secs(60), None).await;

        // seq 0 is the poll-on-start
        let first = next_outcome(&mut harness.events).await;
        assert_eq!(first.outcome.unwrap().trigger, PollTrigger::Scheduled);

        harness.sync_requests.send(()).await.unwrap();
        let second = next_outcome(&mut harness.events).await;
        let outcome = second.outcome.unwrap();
        assert_eq!(outcome.trigger, PollTrigger::Manual);
        assert_eq!(outcome.seq, 1);

        let _ = harness.session_shutdown.send(());
    }

    #[tokio::test]
    async fn failed_poll_reports_ordered_failure() {
        let mut mock = MockIndexer::new();
        mock.expect_deposits().returning(|| {
            Err(IndexerError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let mut harness = spawn_poller(mock, Duration::from_secs(60), None).await;

        let event = next_outcome(&mut harness.events).await;
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
        let outcome = event.outcome.unwrap();
        assert_eq!(outcome.seq, 0);
        assert_eq!(outcome.deposits, None);

        let _ = harness.session_shutdown.send(());
    }

    #[tokio::test]
    async fn stops_after_max_polls() {
        let mut mock = MockIndexer::new();
        mock.expect_deposits().returning(|| Ok(vec![]));

        let mut harness =
            spawn_poller(mock, Duration::from_millis(20), Some(2)).await;

        let first = next_outcome(&mut harness.events).await;
        let second = next_outcome(&mut harness.events).await;
        assert_eq!(first.outcome.unwrap().seq, 0);
        assert_eq!(second.outcome.unwrap().seq, 1);

        // The poll budget triggers the completion shutdown channel.
        timeout(Duration::from_secs(2), harness.completion_shutdown.recv())
            .await
            .expect("timed out waiting for completion shutdown")
            .expect("completion shutdown channel closed");

        for handle in harness.handles {
            timeout(Duration::from_secs(2), handle)
                .await
                .expect("worker did not exit")
                .expect("worker panicked");
        }
    }

    #[tokio::test]
    async fn seq_increases_across_scheduled_polls() {
        let mut mock = MockIndexer::new();
        mock.expect_deposits().returning(|| Ok(vec![]));

        let mut harness = spawn_poller(mock, Duration::from_millis(20), None).await;

        let first = next_outcome(&mut harness.events).await;
        let second = next_outcome(&mut harness.events).await;
        let third = next_outcome(&mut harness.events).await;
        let seqs: Vec<u64> = [first, second, third]
            .into_iter()
            .map(|event| event.outcome.unwrap().seq)
            .collect();
        assert_eq!(seqs, vec![0, 1, 2]);

        let _ = harness.session_shutdown.send(());
    }
}
