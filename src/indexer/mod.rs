use crate::deposit::Deposit;
use crate::environment::Environment;
use crate::indexer::error::IndexerError;

pub(crate) mod client;
pub use client::IndexerClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Indexer: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the current deposit records, most recent first.
    async fn deposits(&self) -> Result<Vec<Deposit>, IndexerError>;
}
