//! Header rendering: title, network and the wallet connect control.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block.clone(), area);

    if area.height <= 2 {
        return;
    }

    let inner = header_block.inner(area);
    frame.render_widget(
        Paragraph::new(create_title()).alignment(Alignment::Left),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1),
    );

    let status = connect_status_line(app);
    let status_width = u16::try_from(status.width())
        .unwrap_or(u16::MAX)
        .min(inner.width);
    if inner.width > 40 {
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Right),
            Rect::new(
                inner.right().saturating_sub(status_width + 1),
                inner.y,
                status_width,
                1,
            ),
        );
    }
}

fn create_title() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "erc20".green().bold(),
        "-indexer".blue().bold(),
        "]".into(),
        Span::styled(
            "  ERC-20 Token Balances",
            Style::default().fg(MUTED_COLOR),
        ),
    ])
}

/// Label for the connect control.
#[must_use]
pub fn connect_label(app: &App) -> &'static str {
    if app.session.connected_account().is_some() {
        "Connected"
    } else if app.session.is_connecting() {
        "Connecting…"
    } else {
        "Connect"
    }
}

fn connect_status_line(app: &App) -> Line<'static> {
    let label = connect_label(app);
    let label_style = match label {
        "Connected" => Style::default()
            .fg(SUCCESS_COLOR)
            .add_modifier(Modifier::BOLD),
        "Connecting…" => Style::default().fg(WARNING_COLOR),
        _ => Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    };

    Line::from(vec![
        Span::styled(
            format!("Network: {}", app.network()),
            Style::default().fg(SUCCESS_COLOR),
        ),
        Span::raw("  "),
        Span::styled(format!("[ {label} ]"), label_style),
    ])
}

// ============================================================================
// Tests
// ============================================================================
