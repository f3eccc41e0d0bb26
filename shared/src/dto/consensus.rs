//! # Consensus Endpoint Responses

use serde::{Deserialize, Serialize};

/// Response body of `GET /consensus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusGetResponse {
    /// Whether the daemon considers itself caught up with the network.
    pub synced: bool,
    /// Current block height.
    #[serde(default)]
    pub height: u64,
}
