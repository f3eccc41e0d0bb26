//! # Wallet Tasks
//!
//! Handlers for the wallet commands: lock status, unlock/lock, wallet
//! creation, balance, transactions, receive addresses and sends.
//!
//! Background polls (lock status, balance, transactions) log failures and
//! leave the UI untouched. State-changing actions surface failures: unlock
//! through the dedicated inline error event, everything else through the
//! generic notification.

use shared::currency;
use tracing::warn;

use crate::app::events::{EventBus, StateUpdate};
use crate::core::service::DaemonService;
use crate::services::transactions::parse_transactions;
use crate::utils::validation::validate_send_request;

/// Seed dictionary requested on wallet creation.
const SEED_DICTIONARY: &str = "english";

/// Poll the wallet's lock and encryption status.
///
/// Exactly one of each status pair fires per poll.
pub(crate) async fn fetch_lock_status(service: &dyn DaemonService, bus: &EventBus) {
    match service.wallet().await {
        Ok(wallet) => {
            bus.send(if wallet.unlocked {
                StateUpdate::SetUnlocked
            } else {
                StateUpdate::SetLocked
            })
            .await;
            bus.send(if wallet.encrypted {
                StateUpdate::SetEncrypted
            } else {
                StateUpdate::SetUnencrypted
            })
            .await;
        }
        Err(e) => {
            warn!(error = %e, "wallet status poll failed");
        }
    }
}

/// Unlock the wallet.
///
/// The password field clears on both outcomes; on failure the error then
/// renders inline next to the (now empty) field.
pub(crate) async fn unlock_wallet(service: &dyn DaemonService, bus: &EventBus, password: String) {
    match service.unlock_wallet(&password).await {
        Ok(()) => {
            bus.send(StateUpdate::SetEncrypted).await;
            bus.send(StateUpdate::SetUnlocked).await;
            bus.send(StateUpdate::SetUnlockPassword(String::new())).await;
        }
        Err(e) => {
            bus.send(StateUpdate::SetUnlockPassword(String::new())).await;
            bus.send(StateUpdate::WalletUnlockError(e)).await;
        }
    }
}

/// Lock the wallet.
pub(crate) async fn lock_wallet(service: &dyn DaemonService, bus: &EventBus) {
    match service.lock_wallet().await {
        Ok(()) => {
            bus.send(StateUpdate::SetEncrypted).await;
            bus.send(StateUpdate::SetLocked).await;
        }
        Err(e) => {
            bus.send(StateUpdate::Notification {
                title: "Error Locking Wallet".to_string(),
                message: e,
            })
            .await;
        }
    }
}

/// Create a new wallet and show its seed.
///
/// The seed dialog stays up until the user unlocks with the new seed, so the
/// handler suspends until a later `SetUnlocked` is observed before dismissing
/// it. The wait has no timeout: if the unlock never happens the dialog stays.
pub(crate) async fn create_wallet(service: &dyn DaemonService, bus: &EventBus) {
    match service.init_wallet(SEED_DICTIONARY).await {
        Ok(response) => {
            let mut unlocked = bus.unlocked_signal();
            let seen = *unlocked.borrow();
            bus.send(StateUpdate::ShowNewWalletDialog {
                seed: response.primary_seed.clone(),
                seed_confirm: response.primary_seed,
            })
            .await;
            if unlocked.wait_for(|count| *count > seen).await.is_ok() {
                bus.send(StateUpdate::DismissNewWalletDialog).await;
            }
        }
        Err(e) => {
            bus.send(StateUpdate::Notification {
                title: "Error Creating Wallet".to_string(),
                message: e,
            })
            .await;
        }
    }
}

/// Poll balances and convert them for display.
pub(crate) async fn fetch_balance(service: &dyn DaemonService, bus: &EventBus) {
    match service.wallet().await {
        Ok(wallet) => {
            let confirmed = currency::hastings_to_siacoin_string(wallet.confirmed_siacoin_balance);
            let delta = wallet.unconfirmed_incoming_siacoins as i128
                - wallet.unconfirmed_outgoing_siacoins as i128;
            bus.send(StateUpdate::SetBalance {
                confirmed,
                unconfirmed: currency::signed_hastings_to_siacoin_string(delta),
                siafund_balance: wallet.siafund_balance,
            })
            .await;
        }
        Err(e) => {
            warn!(error = %e, "balance poll failed");
        }
    }
}

/// Poll the entire transaction history.
pub(crate) async fn fetch_transactions(service: &dyn DaemonService, bus: &EventBus) {
    // endheight -1 requests everything up to the tip
    match service.transactions(0, -1).await {
        Ok(response) => {
            bus.send(StateUpdate::SetTransactions(parse_transactions(&response)))
                .await;
        }
        Err(e) => {
            warn!(error = %e, "transactions poll failed");
        }
    }
}

/// Request a fresh receive address and open the receive prompt.
pub(crate) async fn fetch_receive_address(service: &dyn DaemonService, bus: &EventBus) {
    match service.new_address().await {
        Ok(response) => {
            bus.send(StateUpdate::SetReceiveAddress(response.address)).await;
            bus.send(StateUpdate::ShowReceivePrompt).await;
        }
        Err(e) => {
            bus.send(StateUpdate::Notification {
                title: "Error Getting Address".to_string(),
                message: e,
            })
            .await;
        }
    }
}

/// Send currency.
///
/// Validates locally before any network call. Siacoin amounts are converted
/// from display units to a hastings integer string; siafund amounts pass
/// through unconverted. On success the send prompt closes, balance and
/// transactions refresh once each, and the input fields clear. On failure the
/// fields are left intact so the user can retry.
pub(crate) async fn send_currency(
    service: &dyn DaemonService,
    bus: &EventBus,
    currency_type: String,
    amount: String,
    destination: String,
) {
    const ERROR_TITLE: &str = "Error Sending Currency";

    let check = validate_send_request(&currency_type, &amount, &destination);
    if !check.is_valid {
        bus.send(StateUpdate::Notification {
            title: ERROR_TITLE.to_string(),
            message: check.error.unwrap_or_default(),
        })
        .await;
        return;
    }

    let daemon_amount = if currency_type == "siacoins" {
        match currency::siacoin_string_to_hastings(&amount) {
            Ok(hastings) => hastings.to_string(),
            Err(e) => {
                bus.send(StateUpdate::Notification {
                    title: ERROR_TITLE.to_string(),
                    message: e,
                })
                .await;
                return;
            }
        }
    } else {
        amount
    };

    match service
        .send_currency(&currency_type, &destination, &daemon_amount)
        .await
    {
        Ok(()) => {
            bus.send(StateUpdate::CloseSendPrompt).await;
            fetch_balance(service, bus).await;
            fetch_transactions(service, bus).await;
            bus.send(StateUpdate::SetSendAmount(String::new())).await;
            bus.send(StateUpdate::SetSendAddress(String::new())).await;
        }
        Err(e) => {
            bus.send(StateUpdate::Notification {
                title: ERROR_TITLE.to_string(),
                message: e,
            })
            .await;
        }
    }
}
