//! Help popup listing keybindings by context.
//!
//! Opened with `?` from the results grid; closed with Esc, Enter, `q` or `?`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Address Field",
        &[
            ("Enter", "Check ERC-20 token balances"),
            ("Ctrl+W", "Connect wallet"),
            ("Ctrl+U", "Clear address"),
            ("← / →", "Move cursor"),
            ("Home / End", "Jump to start / end"),
            ("Tab / Esc", "Focus results"),
        ],
    ),
    (
        "Results",
        &[
            ("Enter / r", "Query again"),
            ("c", "Connect wallet"),
            ("↑↓←→ / hjkl", "Move selection"),
            ("g / G", "First / last token"),
            ("y", "Copy contract address"),
            ("o", "Open token in block explorer"),
            ("Tab / i", "Edit address"),
            ("q", "Quit"),
        ],
    ),
    (
        "Anywhere",
        &[("Ctrl+C", "Quit"), ("?", "Toggle help (from results)")],
    ),
];

/// Renders the help popup centered in `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let lines = help_lines();
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup_area = centered_popup_area(area, 60, height);

    frame.render_widget(Clear, popup_area);

    let block =
        create_popup_block("Help (? to close)").border_style(Style::default().fg(ACCENT_COLOR));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (section, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            *section,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_help_popup_lists_bindings() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, frame.area())).unwrap();

        let content = buffer_to_string(terminal.backend().buffer(), 80, 30);
        assert!(content.contains("Help (? to close)"));
        assert!(content.contains("Copy contract address"));
        assert!(content.contains("Connect wallet"));
        assert!(content.contains('╭'));
    }

    #[test]
    fn test_help_popup_small_terminal() {
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, frame.area())).unwrap();
    }

    #[test]
    fn test_help_sections_not_empty() {
        for (section, bindings) in HELP_SECTIONS {
            assert!(!section.is_empty());
            assert!(!bindings.is_empty());
            assert!(bindings.iter().all(|(k, d)| !k.is_empty() && !d.is_empty()));
        }
    }
}
