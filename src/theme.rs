//! Theme and styling constants.
//!
//! Tokyo Night-inspired colors shared by panels, cards and overlays.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements, symbols and the connect control.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Balances, network name, success toasts.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Pending connect, unreadable balances.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error line and failure toasts.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Help popup accent.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);
