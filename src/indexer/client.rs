//! Deposit Indexer Client
//!
//! A client for the deposit indexer service, exposing the deposits feed over HTTP.

use crate::consts::cli_consts;
use crate::deposit::{Deposit, DepositsResponse};
use crate::environment::Environment;
use crate::indexer::Indexer;
use crate::indexer::error::IndexerError;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("deposit-tracker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct IndexerClient {
    client: Client,
    environment: Environment,
}

impl IndexerClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(cli_consts::HTTP_CONNECT_TIMEOUT)
                .timeout(cli_consts::HTTP_REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, IndexerError> {
        if !response.status().is_success() {
            return Err(IndexerError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, IndexerError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        serde_json::from_slice(&response_bytes).map_err(IndexerError::Decode)
    }
}

#[async_trait::async_trait]
impl Indexer for IndexerClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn deposits(&self) -> Result<Vec<Deposit>, IndexerError> {
        let response: DepositsResponse = self.get_json("api/deposits").await?;
        Ok(response.deposits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_without_doubled_slashes() {
        let client = IndexerClient::new(Environment::custom("http://localhost:3000/"));
        assert_eq!(
            client.build_url("/api/deposits"),
            "http://localhost:3000/api/deposits"
        );
        assert_eq!(
            client.build_url("api/deposits"),
            "http://localhost:3000/api/deposits"
        );
    }

    #[test]
    fn default_environment_targets_local_indexer() {
        let client = IndexerClient::new(Environment::default());
        assert_eq!(
            client.build_url("api/deposits"),
            "http://localhost:3000/api/deposits"
        );
    }

    #[tokio::test]
    async fn unreachable_indexer_yields_reqwest_error() {
        // Port 1 is never bound in the test environment.
        let client = IndexerClient::new(Environment::custom("http://127.0.0.1:1"));
        let result = client.deposits().await;
        assert!(matches!(result, Err(IndexerError::Reqwest(_))));
    }
}
