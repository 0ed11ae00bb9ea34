//! Query session state: wallet account, target address, and query outcome.
//!
//! All mutation goes through the transition methods below. The main loop is
//! the only caller, so no locking is involved; races between overlapping
//! queries are settled by [`QueryId`]: only the latest query may write its
//! outcome, and editing the address or starting another query supersedes
//! whatever is in flight.
//!
//! ```text
//!            start_query            query_succeeded(id == latest)
//!   Prompt ─────────────▶ Loading ─────────────────────────────▶ Completed
//!     ▲                     │  query_failed(id == latest)            │
//!     │                     ▼                                        │
//!     └──────────── Prompt + error ◀──── edit_address ───────────────┘
//! ```

use crate::domain::QueryResult;

/// Monotonically increasing identifier of a balance query.
pub type QueryId = u64;

/// What a started query should fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    /// Identifier to report the outcome with.
    pub id: QueryId,
    /// Address captured when the query started.
    pub address: String,
}

/// The three mutually exclusive result panel branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    /// A query is in flight.
    Loading,
    /// The latest query completed; the grid may still be empty.
    Completed,
    /// Nothing has been queried for the current address.
    Prompt,
}

/// Explicit state object for wallet connection and balance queries.
#[derive(Debug, Default)]
pub struct QuerySession {
    address: String,
    connected_account: Option<String>,
    connecting: bool,
    error_message: Option<String>,
    result: Option<QueryResult>,
    latest_query: QueryId,
    in_flight: Option<QueryId>,
}

impl QuerySession {
    /// Creates a session with `address` pre-filled.
    #[must_use]
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current target address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Account reported by the wallet, if connected.
    #[must_use]
    pub fn connected_account(&self) -> Option<&str> {
        self.connected_account.as_deref()
    }

    /// Returns `true` while a connect request is in flight.
    #[must_use]
    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    /// Visible error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Result of the latest completed query.
    #[must_use]
    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }

    /// Returns `true` between query invocation and its settling.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns `true` once the latest query for the current address completed.
    #[must_use]
    pub fn has_queried(&self) -> bool {
        self.result.is_some()
    }

    /// Identifier of the in-flight query, if any.
    #[cfg(test)]
    #[must_use]
    pub fn in_flight(&self) -> Option<QueryId> {
        self.in_flight
    }

    /// Which result branch to render.
    #[must_use]
    pub fn view(&self) -> ResultsView {
        if self.is_busy() {
            ResultsView::Loading
        } else if self.has_queried() {
            ResultsView::Completed
        } else {
            ResultsView::Prompt
        }
    }

    // ========================================================================
    // Wallet Transitions
    // ========================================================================

    /// Applies the account found by the silent start-up lookup.
    ///
    /// Fills the address only if the user has not typed one yet. The fill is
    /// an address edit, so it returns the superseded query, if any.
    pub fn authorized_account_loaded(&mut self, account: Option<String>) -> Option<QueryId> {
        let account = account?;
        let superseded = if self.address.is_empty() {
            self.edit_address(account.clone())
        } else {
            None
        };
        self.connected_account = Some(account);
        superseded
    }

    /// Marks a connect request as started. Returns `false` if one is already running.
    pub fn begin_connect(&mut self) -> bool {
        if self.connecting {
            return false;
        }
        self.connecting = true;
        true
    }

    /// Records a successful connect and targets the connected account.
    ///
    /// Returns the superseded query, if the address change cancelled one.
    pub fn connect_succeeded(&mut self, account: String) -> Option<QueryId> {
        self.connecting = false;
        self.connected_account = Some(account.clone());
        let superseded = if account == self.address {
            None
        } else {
            self.edit_address(account)
        };
        self.error_message = None;
        superseded
    }

    /// Records a failed connect. The connected account is left untouched.
    pub fn connect_failed(&mut self, reason: impl Into<String>) {
        self.connecting = false;
        self.error_message = Some(reason.into());
    }

    // ========================================================================
    // Address Transition
    // ========================================================================

    /// Replaces the address and clears everything derived from the old one.
    ///
    /// Returns the superseded in-flight query, if any.
    pub fn edit_address(&mut self, address: impl Into<String>) -> Option<QueryId> {
        self.address = address.into();
        self.error_message = None;
        self.result = None;
        self.in_flight.take()
    }

    // ========================================================================
    // Query Transitions
    // ========================================================================

    /// Starts a query for the current address, superseding any in-flight one.
    pub fn start_query(&mut self) -> QueryTicket {
        self.latest_query += 1;
        let id = self.latest_query;

        self.in_flight = Some(id);
        self.result = None;
        self.error_message = None;

        QueryTicket {
            id,
            address: self.address.clone(),
        }
    }

    /// Stores a query result. Returns `false` (and changes nothing) if `id` is stale.
    pub fn query_succeeded(&mut self, id: QueryId, result: QueryResult) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }
        self.in_flight = None;
        self.result = Some(result);
        true
    }

    /// Stores a query failure. Returns `false` (and changes nothing) if `id` is stale.
    pub fn query_failed(&mut self, id: QueryId, reason: impl Into<String>) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }
        self.in_flight = None;
        self.error_message = Some(reason.into());
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
