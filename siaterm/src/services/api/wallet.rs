//! # Wallet Endpoints
//!
//! Handles `/wallet` queries and mutations (status, unlock, lock, seed init,
//! transactions, addresses, sends).

use shared::dto::{
    WalletAddressResponse, WalletGetResponse, WalletInitResponse, WalletTransactionsResponse,
};

use super::client::{error_message, SiadClient};

/// Unlocking decrypts the wallet's key files, which can take a long time on
/// large wallets; the default client timeout would abort it.
const UNLOCK_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(20 * 60);

/// Get wallet status and balances.
pub async fn get_wallet(client: &SiadClient) -> Result<WalletGetResponse, String> {
    let url = format!("{}/wallet", client.base_url());

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<WalletGetResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Unlock the wallet with its encryption password.
pub async fn unlock_wallet(client: &SiadClient, password: &str) -> Result<(), String> {
    let url = format!("{}/wallet/unlock", client.base_url());

    let response = client
        .client
        .post(&url)
        .query(&[("encryptionpassword", password)])
        .timeout(UNLOCK_TIMEOUT)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}

/// Lock the wallet, wiping decryption keys from memory.
pub async fn lock_wallet(client: &SiadClient) -> Result<(), String> {
    let url = format!("{}/wallet/lock", client.base_url());

    let response = client
        .client
        .post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}

/// Initialize a new wallet, returning the generated seed.
pub async fn init_wallet(
    client: &SiadClient,
    dictionary: &str,
) -> Result<WalletInitResponse, String> {
    let url = format!("{}/wallet/init", client.base_url());

    let response = client
        .client
        .post(&url)
        .query(&[("dictionary", dictionary)])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<WalletInitResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Get processed transactions over a block height range. An `end_height` of
/// `-1` requests the entire history.
pub async fn get_transactions(
    client: &SiadClient,
    start_height: u64,
    end_height: i64,
) -> Result<WalletTransactionsResponse, String> {
    let url = format!(
        "{}/wallet/transactions?startheight={}&endheight={}",
        client.base_url(),
        start_height,
        end_height
    );

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<WalletTransactionsResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Get a fresh receive address.
pub async fn get_new_address(client: &SiadClient) -> Result<WalletAddressResponse, String> {
    let url = format!("{}/wallet/address", client.base_url());

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<WalletAddressResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Send currency to an address. `currency` is the daemon route segment
/// (`siacoins` or `siafunds`); `amount` is already in daemon units.
pub async fn send_currency(
    client: &SiadClient,
    currency: &str,
    destination: &str,
    amount: &str,
) -> Result<(), String> {
    let url = format!("{}/wallet/{}", client.base_url(), currency);

    let response = client
        .client
        .post(&url)
        .query(&[("destination", destination), ("amount", amount)])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}
