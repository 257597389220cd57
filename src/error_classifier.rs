use crate::indexer::error::IndexerError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Map a fetch failure to the log level its activity-log entry carries.
    /// Every failure still surfaces as the single "disconnected" state; the
    /// level only controls visibility under `RUST_LOG`.
    pub fn classify_fetch_error(&self, error: &IndexerError) -> LogLevel {
        match error {
            // Non-critical: the indexer asked us to slow down
            IndexerError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            // Temporary server issues
            IndexerError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            // Unexpected response shape is a contract problem, not a blip
            IndexerError::Decode(_) => LogLevel::Error,
            // Remaining HTTP statuses (404, auth walls, proxies)
            IndexerError::Http { .. } => LogLevel::Error,
            // Network issues - usually temporary
            IndexerError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> IndexerError {
        IndexerError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn rate_limits_stay_quiet() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
    }

    #[test]
    fn server_errors_warn() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(500)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
    }

    #[test]
    fn shape_mismatches_are_errors() {
        let classifier = ErrorClassifier::new();
        let decode = serde_json::from_str::<crate::deposit::DepositsResponse>("not json")
            .map_err(IndexerError::Decode)
            .unwrap_err();
        assert_eq!(classifier.classify_fetch_error(&decode), LogLevel::Error);
    }

    #[test]
    fn other_client_errors_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(403)), LogLevel::Error);
    }
}
