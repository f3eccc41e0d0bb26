//! # Application Orchestration
//!
//! Maps each incoming [`Command`] to a deterministic sequence of daemon calls
//! and resulting [`StateUpdate`] events.
//!
//! Control flow is strictly linear per command. Commands of different kinds
//! may be in flight concurrently; repeated commands of the same kind each get
//! a fresh handler, with no deduplication or queueing — the daemon is the only
//! shared mutable resource and serializes conflicting requests itself. The one
//! cross-command dependency is wallet creation, which suspends until a later
//! unlock is observed on the event bus.

pub mod commands;
pub mod event_handler;
pub mod events;
pub mod state;
pub(crate) mod tasks;

use std::sync::Arc;

pub use commands::Command;
pub use event_handler::apply_event;
pub use events::{EventBus, StateUpdate};
pub use state::WalletState;

use crate::core::service::DaemonService;

/// Dispatches commands onto independent handler tasks.
///
/// Cheap to clone; clones share the daemon handle and the event bus.
#[derive(Clone)]
pub struct Orchestrator {
    service: Arc<dyn DaemonService>,
    bus: EventBus,
}

impl Orchestrator {
    /// Create an orchestrator emitting state updates onto `tx`.
    pub fn new(service: Arc<dyn DaemonService>, tx: async_channel::Sender<StateUpdate>) -> Self {
        Self {
            service,
            bus: EventBus::new(tx),
        }
    }

    /// Spawn an independent handler task for `command` and return immediately.
    pub fn dispatch(&self, command: Command) {
        let this = self.clone();
        tokio::spawn(async move { this.run(command).await });
    }

    /// Run one command to completion on the current task.
    pub async fn run(&self, command: Command) {
        tracing::debug!(command = ?command, "handling command");
        let service = self.service.as_ref();
        match command {
            Command::GetLockStatus => tasks::wallet::fetch_lock_status(service, &self.bus).await,
            Command::UnlockWallet { password } => {
                tasks::wallet::unlock_wallet(service, &self.bus, password).await
            }
            Command::LockWallet => tasks::wallet::lock_wallet(service, &self.bus).await,
            Command::CreateWallet => tasks::wallet::create_wallet(service, &self.bus).await,
            Command::GetBalance => tasks::wallet::fetch_balance(service, &self.bus).await,
            Command::GetTransactions => {
                tasks::wallet::fetch_transactions(service, &self.bus).await
            }
            Command::GetNewReceiveAddress => {
                tasks::wallet::fetch_receive_address(service, &self.bus).await
            }
            Command::SendCurrency {
                currency,
                amount,
                destination,
            } => {
                tasks::wallet::send_currency(service, &self.bus, currency, amount, destination)
                    .await
            }
            Command::GetSyncState => {
                tasks::consensus::fetch_sync_state(service, &self.bus).await
            }
        }
    }
}
