//! Application constants for the token balance viewer.
//!
//! Centralized UI dimensions, timings and defaults.

use std::time::Duration;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header (title, network, connect control).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the bordered address field.
pub const ADDRESS_BAR_HEIGHT: u16 = 3;

/// Height of the status area below the address field (error line + query hint).
pub const STATUS_HEIGHT: u16 = 2;

/// Height of the footer key hint line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of one token card.
///
/// - Line 1: Symbol and name
/// - Line 2: Balance
/// - Line 3: Logo reference
/// - Line 4: Contract address
/// - plus top and bottom border
pub const CARD_HEIGHT: u16 = 6;

/// Narrowest a card may get before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 28;

/// Upper bound on grid columns.
pub const MAX_GRID_COLUMNS: u16 = 4;

// ============================================================================
// Grid Geometry
// ============================================================================

/// Card grid layout calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Height of each card.
    pub card_height: u16,
    /// Minimum width of each card.
    pub card_min_width: u16,
    /// Maximum number of columns.
    pub max_columns: u16,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            card_height: CARD_HEIGHT,
            card_min_width: CARD_MIN_WIDTH,
            max_columns: MAX_GRID_COLUMNS,
        }
    }
}

impl GridGeometry {
    /// Number of columns that fit in `width`, at least one.
    #[must_use]
    pub const fn columns(&self, width: u16) -> usize {
        let fit = width / self.card_min_width;
        let capped = if fit > self.max_columns {
            self.max_columns
        } else {
            fit
        };
        if capped == 0 { 1 } else { capped as usize }
    }

    /// Number of card rows that fit in `height`, at least one.
    #[must_use]
    pub const fn visible_rows(&self, height: u16) -> usize {
        let rows = height / self.card_height;
        if rows == 0 { 1 } else { rows as usize }
    }
}

// ============================================================================
// Timing Constants
// ============================================================================

/// Main loop tick: redraw cadence and spinner frame rate.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// How many ticks a toast stays visible.
pub const TOAST_TICKS: u8 = 20;

/// Spinner frames for the loading state.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// ============================================================================
// Query Defaults
// ============================================================================

/// Default number of metadata requests allowed in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Default per-request HTTP timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Tests
// ============================================================================
