//! # Consensus Endpoints
//!
//! Handles consensus queries (sync state).

use shared::dto::ConsensusGetResponse;

use super::client::{error_message, SiadClient};

/// Get the daemon's consensus state.
pub async fn get_consensus(client: &SiadClient) -> Result<ConsensusGetResponse, String> {
    let url = format!("{}/consensus", client.base_url());

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<ConsensusGetResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}
