//! Core worker utilities and traits

use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType};
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_poller_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::poller_with_level(message, event_type, log_level))
            .await;
    }

}

/// Worker configuration shared across all worker types
#[derive(Clone)]
pub struct WorkerConfig {
    pub environment: crate::environment::Environment,
    pub poll_interval: std::time::Duration,
    pub max_polls: Option<u32>,
}

impl WorkerConfig {
    pub fn new(environment: crate::environment::Environment) -> Self {
        Self {
            environment,
            poll_interval: crate::consts::cli_consts::polling::poll_interval(),
            max_polls: None,
        }
    }
}
