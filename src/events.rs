//! Event System
//!
//! Types and implementations for worker events and logging

use crate::deposit::Deposit;
use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that polls the indexer for deposit records.
    Poller,
    /// The terminal interface itself (key handling, session lifecycle).
    Interface,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A poll round-trip completed and was applied.
    Success,
    /// A poll failed; the dashboard falls back to disconnected.
    Error,
    /// A poll is in flight.
    Refresh,
    /// The worker is idle between scheduled polls.
    Waiting,
    /// Session lifecycle notices (startup, shutdown, key actions).
    Shutdown,
}

/// What caused a poll to be issued.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PollTrigger {
    /// The fixed-cadence timer fired.
    Scheduled,
    /// The user pressed the sync key.
    Manual,
}

impl Display for PollTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollTrigger::Scheduled => write!(f, "scheduled"),
            PollTrigger::Manual => write!(f, "manual"),
        }
    }
}

/// The result of one completed poll, tagged with its issue order.
///
/// `seq` increases strictly with every poll the worker issues. Polls may
/// overlap and complete out of order; consumers must apply an outcome only
/// when its `seq` is newer than the last one they applied.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PollOutcome {
    /// Issue-order tag, strictly increasing per poll.
    pub seq: u64,
    /// What caused the poll.
    pub trigger: PollTrigger,
    /// The fetched records, or `None` when the poll failed.
    pub deposits: Option<Vec<Deposit>>,
}

impl PollOutcome {
    pub fn success(seq: u64, trigger: PollTrigger, deposits: Vec<Deposit>) -> Self {
        Self {
            seq,
            trigger,
            deposits: Some(deposits),
        }
    }

    pub fn failure(seq: u64, trigger: PollTrigger) -> Self {
        Self {
            seq,
            trigger,
            deposits: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.deposits.is_some()
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Attached poll result, present only on poll completion events.
    pub outcome: Option<PollOutcome>,
}

impl Event {
    pub fn poller(msg: String, event_type: EventType) -> Self {
        Self::new(Worker::Poller, msg, event_type, LogLevel::Info)
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Poller, msg, event_type, log_level)
    }

    pub fn interface(msg: String, event_type: EventType) -> Self {
        Self::new(Worker::Interface, msg, event_type, LogLevel::Info)
    }

    /// A completed poll that produced records.
    pub fn poll_success(msg: String, outcome: PollOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            ..Self::new(Worker::Poller, msg, EventType::Success, LogLevel::Info)
        }
    }

    /// A failed poll. The outcome still carries the seq so consumers can
    /// order it against successes.
    pub fn poll_failure(msg: String, log_level: LogLevel, outcome: PollOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            ..Self::new(Worker::Poller, msg, EventType::Error, log_level)
        }
    }

    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            outcome: None,
        }
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
