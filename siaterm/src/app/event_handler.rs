//! # Event Handler
//!
//! Reference reducer: applies each [`StateUpdate`] to a [`WalletState`].
//! A real UI store would replace this with its own reducers; the mapping is
//! one event to one field group, no fan-out.

use crate::app::events::StateUpdate;
use crate::app::state::{NewWalletSeed, Notification, WalletState};

/// Apply one state update.
pub fn apply_event(state: &mut WalletState, event: StateUpdate) {
    match event {
        StateUpdate::SetLocked => state.unlocked = false,
        StateUpdate::SetUnlocked => state.unlocked = true,
        StateUpdate::SetEncrypted => state.encrypted = true,
        StateUpdate::SetUnencrypted => state.encrypted = false,
        StateUpdate::SetBalance {
            confirmed,
            unconfirmed,
            siafund_balance,
        } => {
            state.confirmed_balance = confirmed;
            state.unconfirmed_delta = unconfirmed;
            state.siafund_balance = siafund_balance;
        }
        StateUpdate::SetTransactions(transactions) => state.transactions = transactions,
        StateUpdate::SetReceiveAddress(address) => state.receive_address = address,
        StateUpdate::ShowReceivePrompt => state.show_receive_prompt = true,
        StateUpdate::ShowNewWalletDialog { seed, seed_confirm } => {
            state.new_wallet_seed = Some(NewWalletSeed { seed, seed_confirm });
        }
        StateUpdate::DismissNewWalletDialog => state.new_wallet_seed = None,
        StateUpdate::SetSyncState(synced) => state.synced = synced,
        StateUpdate::CloseSendPrompt => state.show_send_prompt = false,
        StateUpdate::SetSendAmount(amount) => state.send_amount = amount,
        StateUpdate::SetSendAddress(address) => state.send_address = address,
        StateUpdate::SetUnlockPassword(password) => state.unlock_password = password,
        StateUpdate::WalletUnlockError(message) => state.unlock_error = Some(message),
        StateUpdate::Notification { title, message } => {
            state.notification = Some(Notification { title, message });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_status_updates() {
        let mut state = WalletState::default();
        apply_event(&mut state, StateUpdate::SetUnlocked);
        apply_event(&mut state, StateUpdate::SetEncrypted);
        assert!(state.unlocked);
        assert!(state.encrypted);

        apply_event(&mut state, StateUpdate::SetLocked);
        assert!(!state.unlocked);
        assert!(state.encrypted);
    }

    #[test]
    fn test_balance_update() {
        let mut state = WalletState::default();
        apply_event(
            &mut state,
            StateUpdate::SetBalance {
                confirmed: "2500.00".to_string(),
                unconfirmed: "-1.25".to_string(),
                siafund_balance: 10,
            },
        );
        assert_eq!(state.confirmed_balance, "2500.00");
        assert_eq!(state.unconfirmed_delta, "-1.25");
        assert_eq!(state.siafund_balance, 10);
    }

    #[test]
    fn test_new_wallet_dialog_lifecycle() {
        let mut state = WalletState::default();
        apply_event(
            &mut state,
            StateUpdate::ShowNewWalletDialog {
                seed: "salad plate ...".to_string(),
                seed_confirm: "salad plate ...".to_string(),
            },
        );
        let seed = state.new_wallet_seed.as_ref().unwrap();
        assert_eq!(seed.seed, seed.seed_confirm);

        apply_event(&mut state, StateUpdate::DismissNewWalletDialog);
        assert!(state.new_wallet_seed.is_none());
    }

    #[test]
    fn test_send_prompt_fields() {
        let mut state = WalletState {
            show_send_prompt: true,
            send_amount: "2.5".to_string(),
            send_address: "addr".to_string(),
            ..WalletState::default()
        };
        apply_event(&mut state, StateUpdate::CloseSendPrompt);
        apply_event(&mut state, StateUpdate::SetSendAmount(String::new()));
        apply_event(&mut state, StateUpdate::SetSendAddress(String::new()));
        assert!(!state.show_send_prompt);
        assert!(state.send_amount.is_empty());
        assert!(state.send_address.is_empty());
    }

    #[test]
    fn test_unlock_error_is_inline_not_notification() {
        let mut state = WalletState::default();
        apply_event(
            &mut state,
            StateUpdate::WalletUnlockError("provided encryption key is incorrect".to_string()),
        );
        assert!(state.unlock_error.is_some());
        assert!(state.notification.is_none());
    }
}
