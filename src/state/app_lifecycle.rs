//! Application lifecycle management.
//!
//! - `new()` - builds clients from the effective configuration
//! - `run()` - main event loop
//! - the silent start-up account lookup

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::client::{AlchemyClient, HttpClient, HttpConfig, TokenDataApi, WalletConnector};
use crate::constants::TICK_RATE;
use crate::domain::IndexerError;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, QuerySession, StartupOptions, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration from disk.
    ///
    /// A missing API key is not an error here; queries report it instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(startup_options: StartupOptions) -> Result<Self> {
        let config = AppConfig::load().with_overrides(&startup_options);
        tracing::info!(
            "starting on {} (wallet: {}, concurrency: {})",
            config.network,
            config.wallet_url.as_deref().unwrap_or("none"),
            config.concurrency
        );

        let http = HttpClient::with_config(HttpConfig::with_timeout(Duration::from_secs(
            config.timeout_secs,
        )))
        .map_err(IndexerError::into_report)?;

        let wallet = WalletConnector::from_url(&http, config.wallet_url.as_deref());

        let token_api = startup_options
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| {
                let client = AlchemyClient::new(http.clone(), config.network, key);
                tracing::info!("token API ready for {}", client.network());
                Arc::new(client) as Arc<dyn TokenDataApi>
            });
        if token_api.is_none() {
            tracing::warn!("no API key configured; queries will fail");
        }

        Ok(Self::with_clients(
            config,
            wallet,
            token_api,
            startup_options.address,
            startup_options.query_on_start,
        ))
    }

    /// Assembles an App from already-built clients.
    pub(crate) fn with_clients(
        config: AppConfig,
        wallet: WalletConnector,
        token_api: Option<Arc<dyn TokenDataApi>>,
        address: Option<String>,
        query_on_start: bool,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let session = QuerySession::with_address(address.unwrap_or_default());
        let mut ui = UiState::new();
        ui.cursor_to_end(session.address());

        Self {
            session,
            ui,
            config,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            wallet,
            token_api,
            query_task: None,
            query_on_start,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.load_authorized_account();
        if self.query_on_start && !self.session.address().is_empty() {
            self.run_query();
        }

        let mut last_tick = Instant::now();
        self.draw(terminal)?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Paste(text) => {
                        self.handle_paste(text);
                    }
                    Event::Resize(_, _) => {
                        self.draw(terminal)?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                self.draw(terminal)?;
                last_tick = Instant::now();
            }
        }

        self.abort_query_task();
        Ok(())
    }

    /// Syncs grid geometry with the terminal size, then renders.
    fn draw(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        self.sync_layout(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|frame| ui::render(self, frame))?;
        Ok(())
    }

    // ========================================================================
    // Start-up Tasks
    // ========================================================================

    /// Reads already-authorized accounts without prompting.
    ///
    /// Failures are logged only; the user can still connect explicitly.
    pub(crate) fn load_authorized_account(&self) {
        if !self.wallet.is_available() {
            tracing::debug!("no wallet configured; skipping account lookup");
            return;
        }

        let wallet = self.wallet.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match wallet.authorized_account().await {
                Ok(account) => {
                    let _ = message_tx.send(AppMessage::AuthorizedAccountLoaded(account));
                }
                Err(e) => {
                    tracing::warn!("authorized account lookup failed: {e}");
                }
            }
        });
    }
}
