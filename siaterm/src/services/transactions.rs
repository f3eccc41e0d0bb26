//! # Transaction Normalization
//!
//! Turns the daemon's raw processed transactions into flat summaries the UI
//! can render: one row per transaction with the wallet's net siacoin and
//! siafund movement.
//!
//! The daemon reports every input and output of a transaction, each tagged
//! with whether it belongs to this wallet. The wallet's perspective is the
//! sum of owned outputs minus the sum of owned inputs, computed separately
//! for siacoins and siafunds. Unconfirmed transactions are reported at height
//! `u64::MAX`.

use chrono::{DateTime, Utc};
use shared::currency::signed_hastings_to_siacoin_string;
use shared::dto::{RawTransaction, WalletTransactionsResponse};

/// A normalized transaction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    pub transaction_id: String,
    /// Block height, `None` while unconfirmed.
    pub height: Option<u64>,
    /// Confirmation time, `None` while unconfirmed.
    pub timestamp: Option<DateTime<Utc>>,
    pub confirmed: bool,
    /// Net siacoin movement from the wallet's perspective, as a display
    /// string (negative for outgoing).
    pub siacoins: String,
    /// Net siafund movement. Plain integer, no unit conversion.
    pub siafunds: i64,
}

/// Normalize a full transactions response, newest first.
///
/// Confirmed transactions arrive oldest-first from the daemon; unconfirmed
/// ones are appended after them. Reversing the combined list puts pending
/// transactions at the top.
pub fn parse_transactions(response: &WalletTransactionsResponse) -> Vec<TransactionSummary> {
    let confirmed = response.confirmed_transactions.as_deref().unwrap_or(&[]);
    let unconfirmed = response.unconfirmed_transactions.as_deref().unwrap_or(&[]);

    confirmed
        .iter()
        .chain(unconfirmed.iter())
        .map(summarize)
        .rev()
        .collect()
}

fn summarize(tx: &RawTransaction) -> TransactionSummary {
    let mut siacoins: i128 = 0;
    let mut siafunds: i128 = 0;

    for output in tx.outputs.as_deref().unwrap_or(&[]) {
        if !output.wallet_address {
            continue;
        }
        if output.fund_type.contains("siafund") {
            siafunds = siafunds.saturating_add(signed(output.value));
        } else {
            // "siacoin output" and "miner payout" both credit the wallet
            siacoins = siacoins.saturating_add(signed(output.value));
        }
    }

    for input in tx.inputs.as_deref().unwrap_or(&[]) {
        if !input.wallet_address {
            continue;
        }
        if input.fund_type.contains("siafund") {
            siafunds = siafunds.saturating_sub(signed(input.value));
        } else {
            siacoins = siacoins.saturating_sub(signed(input.value));
        }
    }

    let confirmed = tx.confirmation_height != u64::MAX;
    TransactionSummary {
        transaction_id: tx.transaction_id.clone(),
        height: confirmed.then_some(tx.confirmation_height),
        timestamp: if confirmed {
            DateTime::from_timestamp(tx.confirmation_timestamp as i64, 0)
        } else {
            None
        },
        confirmed,
        siacoins: signed_hastings_to_siacoin_string(siacoins),
        siafunds: siafunds.clamp(i64::MIN as i128, i64::MAX as i128) as i64,
    }
}

/// Daemon values are untrusted input; a value above `i128::MAX` saturates
/// rather than wrapping to a wrong sign.
fn signed(value: u128) -> i128 {
    i128::try_from(value).unwrap_or(i128::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::currency::HASTINGS_PER_SIACOIN;
    use shared::dto::{ProcessedInput, ProcessedOutput};

    fn output(fund_type: &str, mine: bool, value: u128) -> ProcessedOutput {
        ProcessedOutput {
            fund_type: fund_type.to_string(),
            wallet_address: mine,
            related_address: "addr".to_string(),
            value,
        }
    }

    fn input(fund_type: &str, mine: bool, value: u128) -> ProcessedInput {
        ProcessedInput {
            fund_type: fund_type.to_string(),
            wallet_address: mine,
            related_address: "addr".to_string(),
            value,
        }
    }

    fn raw(id: &str, height: u64) -> RawTransaction {
        RawTransaction {
            transaction_id: id.to_string(),
            confirmation_height: height,
            confirmation_timestamp: if height == u64::MAX { u64::MAX } else { 1_700_000_000 },
            inputs: None,
            outputs: None,
        }
    }

    #[test]
    fn test_incoming_payment() {
        let mut tx = raw("tx1", 1000);
        tx.outputs = Some(vec![output("siacoin output", true, 5 * HASTINGS_PER_SIACOIN)]);

        let summary = summarize(&tx);
        assert_eq!(summary.siacoins, "5.00");
        assert_eq!(summary.siafunds, 0);
        assert!(summary.confirmed);
        assert_eq!(summary.height, Some(1000));
        assert!(summary.timestamp.is_some());
    }

    #[test]
    fn test_outgoing_payment_with_change() {
        // Spend 10 SC, 2.5 SC goes out, 7.5 SC comes back as change
        let mut tx = raw("tx2", 1001);
        tx.inputs = Some(vec![input("siacoin input", true, 10 * HASTINGS_PER_SIACOIN)]);
        tx.outputs = Some(vec![
            output("siacoin output", false, 5 * HASTINGS_PER_SIACOIN / 2),
            output("siacoin output", true, 15 * HASTINGS_PER_SIACOIN / 2),
        ]);

        let summary = summarize(&tx);
        assert_eq!(summary.siacoins, "-2.50");
    }

    #[test]
    fn test_miner_payout_credits_wallet() {
        let mut tx = raw("tx3", 1002);
        tx.outputs = Some(vec![output("miner payout", true, 300 * HASTINGS_PER_SIACOIN)]);

        assert_eq!(summarize(&tx).siacoins, "300.00");
    }

    #[test]
    fn test_siafund_movement_is_not_converted() {
        let mut tx = raw("tx4", 1003);
        tx.inputs = Some(vec![input("siafund input", true, 3)]);
        tx.outputs = Some(vec![output("siafund output", true, 1)]);

        let summary = summarize(&tx);
        assert_eq!(summary.siafunds, -2);
        assert_eq!(summary.siacoins, "0.00");
    }

    #[test]
    fn test_oversized_values_saturate_instead_of_wrapping() {
        let mut tx = raw("tx6", 1004);
        tx.outputs = Some(vec![
            output("siacoin output", true, u128::MAX),
            output("siafund output", true, u128::MAX),
        ]);

        let summary = summarize(&tx);
        assert!(!summary.siacoins.starts_with('-'));
        assert_eq!(summary.siafunds, i64::MAX);
    }

    #[test]
    fn test_unconfirmed_transaction() {
        let summary = summarize(&raw("tx5", u64::MAX));
        assert!(!summary.confirmed);
        assert_eq!(summary.height, None);
        assert_eq!(summary.timestamp, None);
    }

    #[test]
    fn test_parse_orders_newest_first() {
        let response = WalletTransactionsResponse {
            confirmed_transactions: Some(vec![raw("old", 10), raw("new", 20)]),
            unconfirmed_transactions: Some(vec![raw("pending", u64::MAX)]),
        };

        let ids: Vec<String> = parse_transactions(&response)
            .into_iter()
            .map(|t| t.transaction_id)
            .collect();
        assert_eq!(ids, vec!["pending", "new", "old"]);
    }

    #[test]
    fn test_parse_handles_null_lists() {
        let response = WalletTransactionsResponse {
            confirmed_transactions: None,
            unconfirmed_transactions: None,
        };
        assert!(parse_transactions(&response).is_empty());
    }
}
