pub mod cli_consts {
    //! Tracker Configuration Constants
    //!
    //! This module contains all configuration constants for the deposit
    //! tracker, organized by functional area for clarity and maintainability.

    use std::time::Duration;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffer size for the worker-to-UI event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of queued manual sync requests.
    pub const SYNC_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Polling cadence configuration.
    pub mod polling {
        use std::time::Duration;

        /// Interval between scheduled deposit polls (milliseconds).
        pub const POLL_INTERVAL_MS: u64 = 20_000;

        /// Helper function to get the scheduled poll interval.
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Connect timeout for indexer HTTP requests.
    pub const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Total request timeout for indexer HTTP requests.
    /// Kept well under the poll interval so a hung request cannot pile up
    /// behind the next scheduled poll.
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Number of cells in the decorative data-stream ticker.
    pub const TICKER_CELLS: usize = 50;

    /// Number of hex characters per ticker cell.
    pub const TICKER_CELL_WIDTH: usize = 8;
}
