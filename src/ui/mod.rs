//! UI rendering.
//!
//! Rendering is a pure function of [`App`]; grid geometry is synced into the
//! state before each draw so navigation and drawing agree.
//!
//! # Module Structure
//!
//! - `header` - title, network and the connect control
//! - `address_bar` - the address field
//! - `results` - spinner, card grid or prompt
//! - `footer` - key hints
//! - `popups` - help overlay
//! - `components` - toast notifications
//! - `layout` - layout calculations shared with state
//! - `helpers` - styled blocks and text truncation

pub mod address_bar;
pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;
pub mod results;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR};

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen for the current state.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size);

    header::render(frame, layout.header, app);
    address_bar::render(frame, layout.address, app);
    render_status(frame, layout.status, app);
    results::render(frame, layout.results, app);
    footer::render(frame, layout.footer, app);

    if app.ui.show_help {
        popups::help::render(frame, size);
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

/// Error line followed by the query hint.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let error = app.session.error_message().map_or_else(Line::default, |message| {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
        ))
    });

    let hint = if app.session.is_busy() {
        Line::from(Span::styled(
            " Checking balances...",
            Style::default().fg(MUTED_COLOR),
        ))
    } else {
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD)),
            Span::styled(": Check ERC-20 Token Balances", Style::default().fg(MUTED_COLOR)),
        ])
    };

    frame.render_widget(Paragraph::new(vec![error, hint]), area);
}

// ============================================================================
// Test Support
// ============================================================================


// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::test_support::{buffer_to_string, create_test_app};
    use super::*;
    use crate::state::AppMessage;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_app(app: &mut App, width: u16, height: u16) -> String {
        app.sync_layout(Rect::new(0, 0, width, height));
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer(), width, height)
    }

    #[test]
    fn test_initial_screen() {
        let mut app = create_test_app();
        let content = render_app(&mut app, 100, 30);

        assert!(content.contains("[erc20-indexer]"));
        assert!(content.contains("Enter: Check ERC-20 Token Balances"));
        assert!(content.contains("Please make a query!"));
        assert!(content.contains("Ctrl+W:Connect"));
    }

    #[test]
    fn test_error_line_shown_in_status() {
        let mut app = create_test_app();
        app.apply_message(AppMessage::WalletConnectFailed {
            reason: "No wallet installed!".into(),
            rejected: false,
        });

        let content = render_app(&mut app, 100, 30);
        assert!(content.contains("No wallet installed!"));
    }

    #[test]
    fn test_error_line_snapshot() {
        let mut app = create_test_app();
        app.apply_message(AppMessage::WalletConnectFailed {
            reason: "No wallet installed!".into(),
            rejected: false,
        });

        let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
        terminal
            .draw(|frame| render_status(frame, frame.area(), &app))
            .unwrap();
        insta::assert_snapshot!("status_error_line", terminal.backend());
    }

    #[test]
    fn test_busy_status_hint() {
        let mut app = create_test_app();
        app.session.start_query();

        let content = render_app(&mut app, 100, 30);
        assert!(content.contains("Checking balances..."));
        assert!(!content.contains("Please make a query!"));
    }

    #[test]
    fn test_help_and_toast_overlays() {
        let mut app = create_test_app();
        app.ui.toggle_help();
        app.ui.show_toast("[+] Contract address copied!", 5);

        let content = render_app(&mut app, 100, 40);
        assert!(content.contains("Help (? to close)"));
        assert!(content.contains("Contract address copied!"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = create_test_app();
        render_app(&mut app, 10, 5);
    }
}
