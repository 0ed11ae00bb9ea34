//! Footer rendering module.
//!
//! Shows the keyboard shortcuts for whichever part of the screen has input.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Key hints for an input context.
#[must_use]
pub const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::AddressInput => {
            "Enter:Query  Ctrl+W:Connect  Ctrl+U:Clear  Tab:Results  Ctrl+C:Quit"
        }
        InputContext::Results => {
            "q:Quit  c:Connect  r:Query  hjkl:Move  y:Copy  o:Open  Tab:Edit  ?:Help"
        }
        InputContext::HelpPopup => "Esc:Close",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;
    use crate::ui::test_support::{buffer_to_string, create_test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use rstest::rstest;

    fn render_footer(app: &App, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer(), width, 1)
    }

    #[rstest]
    #[case::input(Focus::AddressInput, &["Enter:Query", "Ctrl+W:Connect", "Ctrl+C:Quit"])]
    #[case::results(Focus::Results, &["q:Quit", "c:Connect", "y:Copy", "o:Open", "?:Help"])]
    fn test_footer_displays_context_shortcuts(#[case] focus: Focus, #[case] expected: &[&str]) {
        let mut app = create_test_app();
        app.ui.focus = focus;
        let content = render_footer(&app, 100);

        for shortcut in expected {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_footer_help_popup() {
        let mut app = create_test_app();
        app.ui.toggle_help();
        assert!(render_footer(&app, 80).contains("Esc:Close"));
    }

    /// Tests footer rendering handles edge cases and maintains centering.
    #[test]
    fn test_footer_rendering_robustness() {
        let app = create_test_app();

        // Narrow width doesn't panic
        assert_eq!(render_footer(&app, 40).chars().count(), 40);

        // Zero height doesn't panic
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &app))
            .unwrap();

        // Centered at a comfortable width
        let content = render_footer(&app, 100);
        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!(
            leading.abs_diff(trailing) <= 1,
            "Text should be centered. Leading: {leading}, Trailing: {trailing}"
        );
    }
}
