use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use ethers::{
    providers::{Http, Middleware, Provider},
    types::{Address, U256},
};
use url::Url;

use crate::{config::Config, errors::ApiError};

/// Upstream RPC calls are capped at this duration so a stalled provider
/// cannot hold a worker indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only view of on-chain account state. Behind a trait so handlers can
/// be exercised against a stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerReader: Send + Sync {
    async fn get_balance(&self, address: Address) -> Result<U256, ApiError>;
}

#[derive(Clone, Debug)]
pub struct EthersLedger {
    provider: Arc<Provider<Http>>,
}

impl EthersLedger {
    /// Build the long-lived JSON-RPC client from the startup configuration.
    /// No request is made until the first balance lookup.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&config.endpoint())
            .map_err(|e| ApiError::Internal(format!("invalid provider URL: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        let provider = Provider::new(Http::new_with_client(endpoint, client));

        Ok(Self {
            provider: Arc::new(provider),
        })
    }
}

#[async_trait]
impl LedgerReader for EthersLedger {
    async fn get_balance(&self, address: Address) -> Result<U256, ApiError> {
        self.provider
            .get_balance(address, None)
            .await
            .map_err(ApiError::Provider)
    }
}
