//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The orchestrator never talks to the daemon directly; it goes through
//! [`DaemonService`], implemented by [`crate::services::api::SiadClient`] in
//! production and by hand-written mocks in tests. This keeps every command
//! handler testable without a live daemon.

use async_trait::async_trait;
use shared::dto::{
    ConsensusGetResponse, WalletAddressResponse, WalletGetResponse, WalletInitResponse,
    WalletTransactionsResponse,
};

/// Trait for daemon API operations.
///
/// Methods return `Result<T, String>` so failure messages can be forwarded
/// verbatim to the UI's notification surface.
#[async_trait]
pub trait DaemonService: Send + Sync {
    /// Fetch wallet status and balances (`GET /wallet`).
    async fn wallet(&self) -> Result<WalletGetResponse, String>;

    /// Unlock the wallet (`POST /wallet/unlock`). Decryption can take minutes
    /// on slow disks, so implementations must allow a long request timeout.
    async fn unlock_wallet(&self, password: &str) -> Result<(), String>;

    /// Lock the wallet (`POST /wallet/lock`).
    async fn lock_wallet(&self) -> Result<(), String>;

    /// Initialize a new wallet and return its seed (`POST /wallet/init`).
    async fn init_wallet(&self, dictionary: &str) -> Result<WalletInitResponse, String>;

    /// Fetch processed transactions over a height range
    /// (`GET /wallet/transactions`). `end_height` of `-1` means the entire
    /// history.
    async fn transactions(
        &self,
        start_height: u64,
        end_height: i64,
    ) -> Result<WalletTransactionsResponse, String>;

    /// Request a fresh receive address (`GET /wallet/address`).
    async fn new_address(&self) -> Result<WalletAddressResponse, String>;

    /// Send currency (`POST /wallet/{siacoins|siafunds}`). `amount` is already
    /// in the daemon's unit: hastings for siacoins, a plain count for siafunds.
    async fn send_currency(
        &self,
        currency: &str,
        destination: &str,
        amount: &str,
    ) -> Result<(), String>;

    /// Fetch consensus sync state (`GET /consensus`).
    async fn consensus(&self) -> Result<ConsensusGetResponse, String>;
}
