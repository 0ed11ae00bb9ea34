//! Message processing for results coming back from background tasks.

use super::{App, AppMessage};
use crate::constants::TOAST_TICKS;

impl App {
    /// Drains the message channel, applying each result to the session.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    pub(crate) fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::AuthorizedAccountLoaded(account) => {
                tracing::info!("authorized account: {}", account.as_deref().unwrap_or("none"));
                if self.session.authorized_account_loaded(account).is_some() {
                    self.abort_query_task();
                }
                self.ui.cursor_to_end(self.session.address());
                self.ui.reset_grid();
            }
            AppMessage::WalletConnected(account) => {
                tracing::info!("wallet connected: {account}");
                if self.session.connect_succeeded(account).is_some() {
                    self.abort_query_task();
                }
                self.ui.cursor_to_end(self.session.address());
                self.ui.reset_grid();
                self.ui.show_toast("[+] Wallet connected", TOAST_TICKS);
            }
            AppMessage::WalletConnectFailed { reason, rejected } => {
                if rejected {
                    tracing::info!("wallet connect rejected by user: {reason}");
                } else {
                    tracing::warn!("wallet connect failed: {reason}");
                }
                self.session.connect_failed(reason);
            }
            AppMessage::QuerySucceeded { id, result } => {
                let count = result.len();
                if self.session.query_succeeded(id, result) {
                    tracing::info!("query #{id} completed with {count} tokens");
                    self.query_task = None;
                    self.ui.reset_grid();
                } else {
                    tracing::debug!("discarding stale result of query #{id}");
                }
            }
            AppMessage::QueryFailed { id, reason } => {
                if self.session.query_failed(id, reason) {
                    tracing::warn!(
                        "query #{id} failed: {}",
                        self.session.error_message().unwrap_or_default()
                    );
                    self.query_task = None;
                } else {
                    tracing::debug!("discarding stale failure of query #{id}");
                }
            }
        }
    }
}
