//! # Application State
//!
//! Reference wallet state mirroring what a UI store would hold. The reducer
//! in [`crate::app::event_handler`] maps every [`crate::app::StateUpdate`]
//! onto it.

use crate::services::transactions::TransactionSummary;

/// The last generic error notification, for display in a toast/dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Seed pair shown in the new-wallet dialog. The same seed appears as both
/// the displayed value and the confirmation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWalletSeed {
    pub seed: String,
    pub seed_confirm: String,
}

/// Everything the wallet screens render from.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletState {
    pub encrypted: bool,
    pub unlocked: bool,
    /// Confirmed siacoin balance as a 2-decimal display string.
    pub confirmed_balance: String,
    /// Unconfirmed incoming-minus-outgoing delta as a display string.
    pub unconfirmed_delta: String,
    pub siafund_balance: u64,
    pub transactions: Vec<TransactionSummary>,
    pub receive_address: String,
    pub show_receive_prompt: bool,
    pub new_wallet_seed: Option<NewWalletSeed>,
    pub show_send_prompt: bool,
    pub send_amount: String,
    pub send_address: String,
    pub unlock_password: String,
    /// Inline unlock error, shown next to the password field.
    pub unlock_error: Option<String>,
    pub synced: bool,
    pub notification: Option<Notification>,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            encrypted: false,
            unlocked: false,
            confirmed_balance: "0.00".to_string(),
            unconfirmed_delta: "0.00".to_string(),
            siafund_balance: 0,
            transactions: Vec::new(),
            receive_address: String::new(),
            show_receive_prompt: false,
            new_wallet_seed: None,
            show_send_prompt: false,
            send_amount: String::new(),
            send_address: String::new(),
            unlock_password: String::new(),
            unlock_error: None,
            synced: false,
            notification: None,
        }
    }
}
