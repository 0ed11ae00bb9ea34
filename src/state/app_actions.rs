//! User-triggered actions: wallet connect, balance queries, clipboard and browser.

use std::sync::Arc;

use super::platform::clipboard;
use super::{App, AppMessage};
use crate::constants::TOAST_TICKS;
use crate::domain::IndexerError;
use crate::query::fetch_holdings;

impl App {
    // ========================================================================
    // Wallet
    // ========================================================================

    /// Asks the wallet for an account in the background.
    ///
    /// Ignored while a previous connect request is still pending.
    pub(crate) fn connect_wallet(&mut self) {
        if !self.session.begin_connect() {
            tracing::debug!("connect already in flight");
            return;
        }

        let wallet = self.wallet.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match wallet.connect().await {
                Ok(account) => AppMessage::WalletConnected(account),
                Err(e) => AppMessage::WalletConnectFailed {
                    rejected: e.is_user_rejection(),
                    reason: e.to_string(),
                },
            };
            let _ = message_tx.send(message);
        });
    }

    // ========================================================================
    // Balance Query
    // ========================================================================

    /// Starts a balance query for the current address.
    ///
    /// Any in-flight query is aborted and its late result discarded.
    pub(crate) fn run_query(&mut self) {
        self.abort_query_task();
        let ticket = self.session.start_query();
        self.ui.reset_grid();
        tracing::info!("query #{} for {:?}", ticket.id, ticket.address);

        let Some(api) = self.token_api.as_ref().map(Arc::clone) else {
            let reason = IndexerError::config(
                "no API key; set ALCHEMY_API_KEY or pass --api-key",
            )
            .to_string();
            self.session.query_failed(ticket.id, reason);
            return;
        };

        let concurrency = self.config.concurrency;
        let message_tx = self.message_tx.clone();
        let id = ticket.id;

        self.query_task = Some(tokio::spawn(async move {
            let message = match fetch_holdings(api, ticket.address, concurrency).await {
                Ok(result) => AppMessage::QuerySucceeded { id, result },
                Err(e) => AppMessage::QueryFailed {
                    id,
                    reason: e.to_string(),
                },
            };
            let _ = message_tx.send(message);
        }));
    }

    /// Aborts the running query task, if any.
    pub(crate) fn abort_query_task(&mut self) {
        if let Some(task) = self.query_task.take() {
            task.abort();
        }
    }

    // ========================================================================
    // Card Actions
    // ========================================================================

    /// Copies the selected token's contract address to the clipboard.
    pub(crate) fn copy_selected_contract(&mut self) {
        let Some(contract) = self
            .selected_holding()
            .map(|holding| holding.balance.contract_address.clone())
        else {
            self.ui.show_toast("[x] No token selected", TOAST_TICKS);
            return;
        };

        match clipboard::copy_text(&contract) {
            Ok(()) => self.ui.show_toast("[+] Contract address copied!", TOAST_TICKS),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.ui.show_toast(format!("[x] {e}"), TOAST_TICKS);
            }
        }
    }

    /// Opens the selected token on the network's block explorer.
    pub(crate) fn open_selected_in_explorer(&mut self) {
        let Some(url) = self
            .selected_holding()
            .map(|holding| self.network().token_url(&holding.balance.contract_address))
        else {
            self.ui.show_toast("[x] No token selected", TOAST_TICKS);
            return;
        };

        match open::that(&url) {
            Ok(()) => self.ui.show_toast("[+] Opened in browser", TOAST_TICKS),
            Err(e) => {
                tracing::warn!("failed to open {url}: {e}");
                self.ui
                    .show_toast(format!("[x] Failed to open browser: {e}"), TOAST_TICKS);
            }
        }
    }
}
