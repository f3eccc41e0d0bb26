//! Headless entry point: wires the daemon client to the orchestrator and the
//! reference reducer, and drives the background polls (sync state, lock
//! status, balance, transactions) on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use siaterm::app::{apply_event, Command, Orchestrator, WalletState};
use siaterm::services::api::SiadClient;

const POLL_INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (tx, rx) = async_channel::unbounded();
    let orchestrator = Orchestrator::new(Arc::new(SiadClient::new()), tx);
    let state = Arc::new(RwLock::new(WalletState::default()));

    // State consumer: apply every update to the reference state.
    {
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Ok(event) = rx.recv().await {
                debug!(event = ?event, "state update");
                apply_event(&mut state.write(), event);
            }
        });
    }

    info!("polling daemon every {:?}", POLL_INTERVAL);
    loop {
        orchestrator.dispatch(Command::GetSyncState);
        orchestrator.dispatch(Command::GetLockStatus);
        orchestrator.dispatch(Command::GetBalance);
        orchestrator.dispatch(Command::GetTransactions);

        tokio::time::sleep(POLL_INTERVAL).await;

        let snapshot = state.read();
        info!(
            synced = snapshot.synced,
            encrypted = snapshot.encrypted,
            unlocked = snapshot.unlocked,
            confirmed = %snapshot.confirmed_balance,
            unconfirmed = %snapshot.unconfirmed_delta,
            siafunds = snapshot.siafund_balance,
            transactions = snapshot.transactions.len(),
            "wallet snapshot"
        );
    }
}
