//! # API Client
//!
//! Main HTTP client for daemon API communication.

use reqwest::Client;
use shared::dto::{
    ConsensusGetResponse, DaemonErrorResponse, WalletAddressResponse, WalletGetResponse,
    WalletInitResponse, WalletTransactionsResponse,
};

use crate::core::service::DaemonService;

/// Default daemon API address.
const API_BASE_URL: &str = "http://127.0.0.1:9980";

/// Environment variable overriding the daemon API address.
const API_ADDR_ENV: &str = "SIAD_API_ADDR";

/// HTTP client for communicating with the Sia daemon.
///
/// The daemon rejects requests without a `Sia-Agent` user agent, so the
/// client sets it on every request. A 10 second timeout prevents background
/// polls from piling up when the daemon is unresponsive; wallet unlock
/// overrides it per-request since decryption can be slow.
pub struct SiadClient {
    pub(crate) client: Client,
    base_url: String,
}

impl SiadClient {
    /// Create a client pointed at `SIAD_API_ADDR`, falling back to the
    /// default localhost address.
    pub fn new() -> Self {
        let base_url =
            std::env::var(API_ADDR_ENV).unwrap_or_else(|_| API_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit daemon address.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .user_agent("Sia-Agent")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for SiadClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the daemon's error message from a non-2xx response.
///
/// The daemon reports errors as `{"message": "..."}`; if the body is not in
/// that shape the HTTP status is used instead.
pub(crate) async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<DaemonErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => format!("daemon returned {}", status),
    }
}

// Implement DaemonService for SiadClient
#[async_trait::async_trait]
impl DaemonService for SiadClient {
    async fn wallet(&self) -> Result<WalletGetResponse, String> {
        crate::services::api::wallet::get_wallet(self).await
    }

    async fn unlock_wallet(&self, password: &str) -> Result<(), String> {
        crate::services::api::wallet::unlock_wallet(self, password).await
    }

    async fn lock_wallet(&self) -> Result<(), String> {
        crate::services::api::wallet::lock_wallet(self).await
    }

    async fn init_wallet(&self, dictionary: &str) -> Result<WalletInitResponse, String> {
        crate::services::api::wallet::init_wallet(self, dictionary).await
    }

    async fn transactions(
        &self,
        start_height: u64,
        end_height: i64,
    ) -> Result<WalletTransactionsResponse, String> {
        crate::services::api::wallet::get_transactions(self, start_height, end_height).await
    }

    async fn new_address(&self) -> Result<WalletAddressResponse, String> {
        crate::services::api::wallet::get_new_address(self).await
    }

    async fn send_currency(
        &self,
        currency: &str,
        destination: &str,
        amount: &str,
    ) -> Result<(), String> {
        crate::services::api::wallet::send_currency(self, currency, destination, amount).await
    }

    async fn consensus(&self) -> Result<ConsensusGetResponse, String> {
        crate::services::api::consensus::get_consensus(self).await
    }
}
