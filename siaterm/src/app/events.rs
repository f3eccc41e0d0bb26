//! # State-Update Events
//!
//! Event types for async task communication between command handlers and the
//! state consumer, plus the [`EventBus`] they are emitted through.

use std::sync::Arc;

use tokio::sync::watch;

use crate::services::transactions::TransactionSummary;

/// State updates sent to the store consumer.
///
/// Ordering between events emitted by the same command matters (e.g. the
/// password field clears before the unlock error appears).
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    /// Wallet is locked.
    SetLocked,
    /// Wallet is unlocked.
    SetUnlocked,
    /// A wallet seed exists.
    SetEncrypted,
    /// No wallet seed has been set yet.
    SetUnencrypted,
    /// Balances refreshed. Siacoin values are 2-decimal display strings;
    /// the siafund balance is a plain integer.
    SetBalance {
        confirmed: String,
        unconfirmed: String,
        siafund_balance: u64,
    },
    /// Transaction history refreshed.
    SetTransactions(Vec<TransactionSummary>),
    /// A fresh receive address was generated.
    SetReceiveAddress(String),
    /// Open the receive prompt.
    ShowReceivePrompt,
    /// Show the new-wallet seed dialog. The seed appears twice: once for
    /// display and once as the confirmation value.
    ShowNewWalletDialog { seed: String, seed_confirm: String },
    /// Close the new-wallet seed dialog.
    DismissNewWalletDialog,
    /// Consensus sync state changed.
    SetSyncState(bool),
    /// Close the send prompt.
    CloseSendPrompt,
    /// Overwrite the send amount input field.
    SetSendAmount(String),
    /// Overwrite the send destination input field.
    SetSendAddress(String),
    /// Overwrite the unlock password input field.
    SetUnlockPassword(String),
    /// Unlock failed; shown inline next to the password field rather than as
    /// a generic notification.
    WalletUnlockError(String),
    /// Generic titled error notification.
    Notification { title: String, message: String },
}

/// Channel through which command handlers emit state updates.
///
/// Besides forwarding every event to the consumer, the bus counts observed
/// `SetUnlocked` events on a watch channel so that the one cross-command wait
/// (wallet creation blocking until a later unlock) has something to subscribe
/// to.
#[derive(Clone)]
pub struct EventBus {
    tx: async_channel::Sender<StateUpdate>,
    unlocked: Arc<watch::Sender<u64>>,
}

impl EventBus {
    pub fn new(tx: async_channel::Sender<StateUpdate>) -> Self {
        let (unlocked, _) = watch::channel(0);
        Self {
            tx,
            unlocked: Arc::new(unlocked),
        }
    }

    /// Emit a state update. Send failures mean the consumer is gone and are
    /// ignored, matching the fire-and-forget semantics of the handlers.
    ///
    /// The event is enqueued before the unlock counter is bumped, so any
    /// waiter woken by the counter emits strictly after the `SetUnlocked` it
    /// observed.
    pub async fn send(&self, event: StateUpdate) {
        let is_unlock = matches!(event, StateUpdate::SetUnlocked);
        let _ = self.tx.send(event).await;
        if is_unlock {
            self.unlocked.send_modify(|n| *n += 1);
        }
    }

    /// Subscribe to the count of `SetUnlocked` events observed so far.
    pub fn unlocked_signal(&self) -> watch::Receiver<u64> {
        self.unlocked.subscribe()
    }
}
