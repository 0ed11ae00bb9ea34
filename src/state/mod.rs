//! State management for the token balance viewer.
//!
//! The state is decomposed by concern:
//!
//! - [`QuerySession`] - wallet account, target address and query outcome
//! - [`UiState`] - focus, cursor, card selection, toasts, help popup
//! - [`AppConfig`] - persistent configuration merged with command line flags
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                         App                          │
//! ├──────────────────┬──────────────────┬────────────────┤
//! │   QuerySession   │     UiState      │   AppConfig    │
//! │  - address       │  - focus         │  - network     │
//! │  - account       │  - cursor        │  - wallet url  │
//! │  - result/error  │  - selection     │  - concurrency │
//! └──────────────────┴──────────────────┴────────────────┘
//! ```
//!
//! Background tasks (wallet requests, balance queries) never touch state
//! directly; they report through [`AppMessage`] and the main loop applies
//! the corresponding session transition.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::{TokenDataApi, WalletConnector};
use crate::domain::{Network, QueryResult};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod platform;
pub mod session;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use session::{QueryId, QuerySession, ResultsView};
pub use ui_state::{AddressEdit, CursorMove, Focus, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Silent start-up account lookup finished.
    AuthorizedAccountLoaded(Option<String>),
    /// The wallet granted access to an account.
    WalletConnected(String),
    /// The wallet request failed or was rejected.
    WalletConnectFailed {
        /// Reason shown to the user.
        reason: String,
        /// The user declined the request in the wallet.
        rejected: bool,
    },
    /// A balance query finished.
    QuerySucceeded {
        /// Query the result belongs to.
        id: QueryId,
        /// Balances joined with metadata.
        result: QueryResult,
    },
    /// A balance query failed.
    QueryFailed {
        /// Query the failure belongs to.
        id: QueryId,
        /// Reason shown to the user.
        reason: String,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Address to pre-fill; wins over the wallet's authorized account.
    pub address: Option<String>,
    /// Network override.
    pub network: Option<Network>,
    /// Wallet endpoint override.
    pub wallet_url: Option<String>,
    /// Token API key.
    pub api_key: Option<String>,
    /// Metadata concurrency override.
    pub concurrency: Option<usize>,
    /// Run a query right after start-up.
    pub query_on_start: bool,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Wallet and query state.
    pub session: QuerySession,

    /// UI state - focus, cursor, selection, toasts.
    pub ui: UiState,

    /// Effective configuration (file + command line).
    pub config: AppConfig,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for the spinner.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver only goes away
    // during shutdown.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Clients
    // ========================================================================
    /// Wallet provider access.
    pub(crate) wallet: WalletConnector,

    /// Token data API; `None` when no API key was supplied.
    pub(crate) token_api: Option<Arc<dyn TokenDataApi>>,

    /// Task running the latest balance query.
    pub(crate) query_task: Option<JoinHandle<()>>,

    /// Whether to run a query right after start-up.
    pub(crate) query_on_start: bool,
}

impl App {
    /// Network the token API and explorer links point at.
    #[must_use]
    pub fn network(&self) -> Network {
        self.config.network
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Key and paste handling, command execution
mod app_commands;

// Card selection
mod app_navigation;

// Wallet, query, clipboard, browser actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
