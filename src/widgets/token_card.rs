//! Token card widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::TokenHolding;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::{truncate_end, truncate_middle};

// ============================================================================
// TokenCard Widget
// ============================================================================

/// One cell of the results grid.
///
/// ```text
/// ╭──────────────────────────╮
/// │ WETH  Wrapped Ether      │
/// │ 1.0                      │
/// │ https://static.alchem…   │
/// │ 0x7b7999…ae098e7f9       │
/// ╰──────────────────────────╯
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenCard<'a> {
    holding: TokenHolding<'a>,
    selected: bool,
}

impl<'a> TokenCard<'a> {
    #[must_use]
    pub const fn new(holding: TokenHolding<'a>) -> Self {
        Self {
            holding,
            selected: false,
        }
    }

    /// Highlights the card as the current selection.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Content lines for a card whose inner width is `width`.
    #[must_use]
    pub fn to_lines(&self, width: usize) -> Vec<Line<'static>> {
        let metadata = self.holding.metadata;
        let symbol = metadata.display_symbol().to_string();
        let name_room = width.saturating_sub(symbol.chars().count() + 2);
        let name = metadata
            .name
            .as_deref()
            .map(|name| truncate_middle(name, name_room))
            .unwrap_or_default();

        let balance = self.holding.display_balance();
        let balance_style = if self.holding.balance.raw.is_some() {
            Style::default().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(WARNING_COLOR)
        };

        vec![
            Line::from(vec![
                Span::styled(
                    symbol,
                    Style::default()
                        .fg(PRIMARY_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(name),
            ]),
            Line::from(Span::styled(truncate_end(&balance, width), balance_style)),
            Line::from(Span::styled(
                truncate_middle(self.holding.display_logo(), width),
                Style::default().fg(MUTED_COLOR),
            )),
            Line::from(Span::styled(
                truncate_middle(&self.holding.balance.contract_address, width),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Widget for TokenCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_set, border_style) = if self.selected {
            (border::THICK, Style::default().fg(PRIMARY_COLOR))
        } else {
            (border::ROUNDED, Style::default().fg(Color::DarkGray))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = self.to_lines(usize::from(inner.width));
        let style = if self.selected {
            Style::default().bg(Color::Rgb(36, 40, 59))
        } else {
            Style::default()
        };
        Paragraph::new(lines).style(style).render(inner, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================
