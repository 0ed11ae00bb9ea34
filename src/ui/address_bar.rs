//! Address field rendering.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

use super::helpers::create_border_block;

const PLACEHOLDER: &str = "Enter a wallet address (0x...)";

/// Renders the address field; places the terminal cursor when focused.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.is_input_focused() && !app.ui.show_help;
    let block = create_border_block("Get all the ERC-20 token balances of this address:", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let address = app.session.address();
    let width = usize::from(inner.width.saturating_sub(1));
    let (start, cursor_col) = visible_window(app.ui.cursor, width);

    let line = if address.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(MUTED_COLOR)))
    } else {
        let shown: String = address.chars().skip(start).take(width).collect();
        Line::from(Span::styled(shown, Style::default().fg(Color::White)))
    };
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1),
    );

    if focused {
        let col = u16::try_from(cursor_col).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            (inner.x + 1).saturating_add(col).min(inner.right().saturating_sub(1)),
            inner.y,
        ));
    }
}

/// First visible char and cursor column for a field `width` cells wide.
///
/// Scrolls only as far as needed to keep the cursor on screen.
#[must_use]
fn visible_window(cursor: usize, width: usize) -> (usize, usize) {
    if width == 0 {
        return (cursor, 0);
    }
    let start = cursor.saturating_sub(width - 1);
    (start, cursor - start)
}

// ============================================================================
// Tests
// ============================================================================
