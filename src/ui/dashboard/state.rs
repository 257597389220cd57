//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, TICKER_CELL_WIDTH, TICKER_CELLS};
use crate::deposit::Deposit;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Which transaction view the table presents. Display-only: switching views
/// never touches the records, the connection state, or the poll cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    External,
    Internal,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::External => ViewMode::Internal,
            ViewMode::Internal => ViewMode::External,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ViewMode::External => "EXTERNAL TRANSACTIONS",
            ViewMode::Internal => "INTERNAL TRANSACTIONS",
        }
    }

    /// The pubkey column only makes sense for external transactions.
    pub fn shows_pubkey(self) -> bool {
        matches!(self, ViewMode::External)
    }
}

/// Dashboard state fed by poll outcomes and rendered every frame.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Cadence between scheduled polls, for display only.
    pub poll_interval: Duration,
    /// Records from the freshest applied poll, most recent first.
    pub deposits: Vec<Deposit>,
    /// Whether the freshest applied poll succeeded.
    pub is_connected: bool,
    /// Block number of the first record of the last non-empty fetch.
    pub last_block: Option<u64>,
    /// Current table view.
    pub view: ViewMode,
    /// Row currently highlighted in the table.
    pub selected_row: usize,
    /// Decorative ticker strip of random hex cells.
    pub ticker_cells: Vec<String>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Record captured for the detail view, kept stable across refreshes.
    selected_deposit: Option<Deposit>,
    /// Seq of the freshest applied outcome. Older completions are dropped.
    last_applied_seq: Option<u64>,
    /// Timestamp of the last applied successful poll.
    last_synced_at: Option<String>,
    /// Number of poll outcomes applied so far.
    polls_applied: u64,
    /// Whether the poller has a fetch in flight right now.
    sync_in_flight: bool,
    /// When the last scheduled poll completed. Manual syncs do not move
    /// this anchor; the countdown tracks the fixed cadence.
    last_scheduled_poll_at: Option<Instant>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        let mut state = Self {
            environment,
            start_time,
            poll_interval: ui_config.poll_interval,
            deposits: Vec::new(),
            is_connected: false,
            last_block: None,
            view: ViewMode::default(),
            selected_row: 0,
            ticker_cells: Vec::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            selected_deposit: None,
            last_applied_seq: None,
            last_synced_at: None,
            polls_applied: 0,
            sync_in_flight: false,
            last_scheduled_poll_at: None,
        };
        state.refresh_ticker();
        state
    }

    // Getter methods for private fields
    pub fn last_applied_seq(&self) -> Option<u64> {
        self.last_applied_seq
    }

    pub fn last_synced_at(&self) -> Option<&str> {
        self.last_synced_at.as_deref()
    }

    pub fn polls_applied(&self) -> u64 {
        self.polls_applied
    }

    pub fn sync_in_flight(&self) -> bool {
        self.sync_in_flight
    }

    /// Fraction of the scheduled interval left before the next poll, for
    /// the header countdown. `None` until a scheduled poll has completed.
    pub fn next_sync_fraction(&self) -> Option<f64> {
        let anchor = self.last_scheduled_poll_at?;
        let interval = self.poll_interval.as_secs_f64();
        if interval <= 0.0 {
            return None;
        }
        let elapsed = anchor.elapsed().as_secs_f64();
        Some(((interval - elapsed) / interval).clamp(0.0, 1.0))
    }

    // Setter methods for private fields (for updaters)
    pub fn set_last_applied_seq(&mut self, seq: u64) {
        self.last_applied_seq = Some(seq);
        self.polls_applied += 1;
    }

    pub fn set_last_synced_at(&mut self, timestamp: String) {
        self.last_synced_at = Some(timestamp);
    }

    pub fn set_sync_in_flight(&mut self, in_flight: bool) {
        self.sync_in_flight = in_flight;
    }

    pub fn mark_scheduled_poll(&mut self) {
        self.last_scheduled_poll_at = Some(Instant::now());
    }

    /// Flip between the external and internal views.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        self.refresh_ticker();
    }

    /// Move the table highlight down one row.
    pub fn select_next(&mut self) {
        if !self.deposits.is_empty() && self.selected_row + 1 < self.deposits.len() {
            self.selected_row += 1;
        }
    }

    /// Move the table highlight up one row.
    pub fn select_previous(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Capture the highlighted record for the detail view.
    pub fn open_details(&mut self) {
        self.selected_deposit = self.deposits.get(self.selected_row).cloned();
    }

    pub fn close_details(&mut self) {
        self.selected_deposit = None;
    }

    pub fn details(&self) -> Option<&Deposit> {
        self.selected_deposit.as_ref()
    }

    pub fn details_open(&self) -> bool {
        self.selected_deposit.is_some()
    }

    /// Refill the decorative ticker with fresh random hex cells.
    pub fn refresh_ticker(&mut self) {
        self.ticker_cells = (0..TICKER_CELLS)
            .map(|_| format!("{:0width$x}", rand::random::<u32>(), width = TICKER_CELL_WIDTH))
            .collect();
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
