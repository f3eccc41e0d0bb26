//! # Wallet Commands
//!
//! Tagged requests produced by UI input. Each command is consumed once by the
//! orchestrator, which maps it to a deterministic sequence of daemon calls and
//! state updates.

/// A single UI-triggered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Poll the wallet's lock and encryption status.
    GetLockStatus,
    /// Unlock the wallet with its encryption password.
    UnlockWallet { password: String },
    /// Lock the wallet.
    LockWallet,
    /// Create a new wallet and show its seed.
    CreateWallet,
    /// Poll confirmed/unconfirmed balances.
    GetBalance,
    /// Poll the full transaction history.
    GetTransactions,
    /// Request a fresh receive address and show the receive prompt.
    GetNewReceiveAddress,
    /// Send funds. `currency` must be `"siacoins"` or `"siafunds"`; `amount`
    /// is in display units for siacoins and a plain count for siafunds.
    SendCurrency {
        currency: String,
        amount: String,
        destination: String,
    },
    /// Poll consensus sync state.
    GetSyncState,
}
