//! # Consensus Tasks
//!
//! Background sync-state poll.

use tracing::warn;

use crate::app::events::{EventBus, StateUpdate};
use crate::core::service::DaemonService;

/// Poll whether the daemon is synced with the network.
pub(crate) async fn fetch_sync_state(service: &dyn DaemonService, bus: &EventBus) {
    match service.consensus().await {
        Ok(response) => {
            bus.send(StateUpdate::SetSyncState(response.synced)).await;
        }
        Err(e) => {
            warn!(error = %e, "sync state poll failed");
        }
    }
}
