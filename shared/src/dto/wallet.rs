//! # Wallet Endpoint Responses
//!
//! Models for `/wallet`, `/wallet/init`, `/wallet/address` and
//! `/wallet/transactions`. Field names follow the daemon's lowercase wire keys
//! via `#[serde(rename)]`.

use serde::{Deserialize, Serialize};

/// Response body of `GET /wallet`: lock/encryption status plus balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletGetResponse {
    /// Whether a seed has been set (the wallet exists).
    pub encrypted: bool,
    /// Whether the wallet is currently unlocked.
    pub unlocked: bool,
    /// Confirmed balance in hastings.
    #[serde(rename = "confirmedsiacoinbalance")]
    pub confirmed_siacoin_balance: u128,
    /// Unconfirmed incoming siacoins in hastings.
    #[serde(rename = "unconfirmedincomingsiacoins")]
    pub unconfirmed_incoming_siacoins: u128,
    /// Unconfirmed outgoing siacoins in hastings.
    #[serde(rename = "unconfirmedoutgoingsiacoins")]
    pub unconfirmed_outgoing_siacoins: u128,
    /// Siafund balance. Integer count, never unit-converted.
    #[serde(rename = "siafundbalance")]
    pub siafund_balance: u64,
}

/// Response body of `POST /wallet/init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletInitResponse {
    /// The generated seed phrase, shown to the user exactly once.
    #[serde(rename = "primaryseed")]
    pub primary_seed: String,
}

/// Response body of `GET /wallet/address`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletAddressResponse {
    pub address: String,
}

/// Response body of `GET /wallet/transactions`.
///
/// The daemon nulls these lists when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletTransactionsResponse {
    #[serde(rename = "confirmedtransactions")]
    pub confirmed_transactions: Option<Vec<RawTransaction>>,
    #[serde(rename = "unconfirmedtransactions")]
    pub unconfirmed_transactions: Option<Vec<RawTransaction>>,
}

/// One processed transaction as reported by the daemon.
///
/// Unconfirmed transactions are reported at height and timestamp `u64::MAX`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "transactionid")]
    pub transaction_id: String,
    #[serde(rename = "confirmationheight")]
    pub confirmation_height: u64,
    #[serde(rename = "confirmationtimestamp")]
    pub confirmation_timestamp: u64,
    pub inputs: Option<Vec<ProcessedInput>>,
    pub outputs: Option<Vec<ProcessedOutput>>,
}

/// A transaction input annotated with wallet ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedInput {
    /// Fund category, e.g. `"siacoin input"` or `"siafund input"`.
    #[serde(rename = "fundtype")]
    pub fund_type: String,
    /// True when the spent output belonged to this wallet.
    #[serde(rename = "walletaddress")]
    pub wallet_address: bool,
    #[serde(rename = "relatedaddress")]
    pub related_address: String,
    /// Value in hastings (or siafund count for siafund inputs).
    pub value: u128,
}

/// A transaction output annotated with wallet ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedOutput {
    /// Fund category, e.g. `"siacoin output"`, `"siafund output"` or `"miner payout"`.
    #[serde(rename = "fundtype")]
    pub fund_type: String,
    /// True when the output is addressed to this wallet.
    #[serde(rename = "walletaddress")]
    pub wallet_address: bool,
    #[serde(rename = "relatedaddress")]
    pub related_address: String,
    /// Value in hastings (or siafund count for siafund outputs).
    pub value: u128,
}

/// Error body returned by the daemon on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wallet_status() {
        // 2500 SC confirmed; currency values arrive as bare big integers
        let json = r#"{
            "encrypted": true,
            "unlocked": false,
            "confirmedsiacoinbalance": 2500000000000000000000000000,
            "unconfirmedincomingsiacoins": 0,
            "unconfirmedoutgoingsiacoins": 0,
            "siafundbalance": 10,
            "siacoinclaimbalance": 0
        }"#;
        let response: WalletGetResponse = serde_json::from_str(json).unwrap();
        assert!(response.encrypted);
        assert!(!response.unlocked);
        assert_eq!(
            response.confirmed_siacoin_balance,
            2_500_000_000_000_000_000_000_000_000
        );
        assert_eq!(response.siafund_balance, 10);
    }

    #[test]
    fn test_deserialize_transactions_with_null_lists() {
        let json = r#"{"confirmedtransactions": null, "unconfirmedtransactions": null}"#;
        let response: WalletTransactionsResponse = serde_json::from_str(json).unwrap();
        assert!(response.confirmed_transactions.is_none());
        assert!(response.unconfirmed_transactions.is_none());
    }

    #[test]
    fn test_deserialize_transaction() {
        let json = r#"{
            "transactionid": "abc123",
            "confirmationheight": 1000,
            "confirmationtimestamp": 1700000000,
            "inputs": [
                {"fundtype": "siacoin input", "walletaddress": true, "relatedaddress": "addr1", "value": 1000000000000000000000000}
            ],
            "outputs": [
                {"fundtype": "siacoin output", "walletaddress": false, "relatedaddress": "addr2", "value": 1000000000000000000000000}
            ]
        }"#;
        let tx: RawTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_id, "abc123");
        assert!(tx.inputs.as_ref().unwrap()[0].wallet_address);
        assert_eq!(tx.outputs.as_ref().unwrap()[0].fund_type, "siacoin output");
    }
}
