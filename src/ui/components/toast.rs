//! Toast notification overlay.
//!
//! Short-lived feedback for clipboard, browser and wallet actions, drawn in
//! the bottom-right corner above the footer.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
const TOAST_MARGIN: u16 = 2;
/// Border plus one cell of padding on each side.
const TOAST_CHROME: u16 = 4;

/// Renders `message` as a toast within `area`.
///
/// `[+]` messages are green, `[x]` messages red, anything else white.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(message_color(message)))
            .alignment(Alignment::Center),
        inner,
    );
}

#[must_use]
fn toast_area(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len
        .saturating_add(TOAST_CHROME)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    Rect::new(
        area.x + area.width.saturating_sub(width + TOAST_MARGIN),
        area.y + area.height.saturating_sub(height + TOAST_MARGIN),
        width,
        height,
    )
}

#[must_use]
fn message_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::success("[+] Contract address copied!", SUCCESS_COLOR)]
    #[case::failure("[x] No token selected", ERROR_COLOR)]
    #[case::plain("Hello", Color::White)]
    #[case::empty("", Color::White)]
    fn test_message_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(message_color(message), expected);
    }

    #[test]
    fn test_toast_area_bottom_right() {
        let area = Rect::new(0, 0, 100, 40);
        let toast = toast_area(area, "[+] Opened in browser");

        assert_eq!(toast.height, TOAST_HEIGHT);
        assert_eq!(toast.width, 25);
        assert_eq!(toast.right(), 98);
        assert_eq!(toast.bottom(), 38);
    }

    #[test]
    fn test_toast_area_width_bounds() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(toast_area(area, "Hi").width, MIN_TOAST_WIDTH);
        assert_eq!(toast_area(area, &"x".repeat(200)).width, 50);

        let tiny = Rect::new(0, 0, 10, 2);
        let toast = toast_area(tiny, "[x] Failed");
        assert!(toast.width <= tiny.width);
        assert!(toast.height <= tiny.height);
    }

    #[test]
    fn test_render_toast_draws_message() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] Wallet connected"))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..80u16)
            .map(|x| buffer[(x, 16u16)].symbol().to_string())
            .collect();
        assert!(row.contains("Wallet connected"));
    }
}
