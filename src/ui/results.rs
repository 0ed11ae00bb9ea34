//! Results area: spinner while loading, card grid once completed, prompt otherwise.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::{CARD_HEIGHT, SPINNER_FRAMES};
use crate::domain::QueryResult;
use crate::state::{App, ResultsView};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::widgets::TokenCard;

use super::helpers::create_border_block;
use super::layout::calculate_grid_layout;

const PROMPT: &str = "Please make a query! This may take a few seconds...";

/// Render the results panel
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = !app.ui.is_input_focused() && !app.ui.show_help;
    let block = create_border_block(&panel_title(app), focused);
    frame.render_widget(block, area);

    let grid = calculate_grid_layout(area);
    if grid.inner.width == 0 || grid.inner.height == 0 {
        return;
    }

    match app.session.view() {
        ResultsView::Loading => render_centered(
            frame,
            grid.inner,
            Line::from(vec![
                Span::styled(
                    spinner_frame(app.animation_tick),
                    Style::default().fg(PRIMARY_COLOR),
                ),
                Span::raw(" Fetching token balances..."),
            ]),
        ),
        ResultsView::Prompt => render_centered(
            frame,
            grid.inner,
            Line::from(Span::styled(PROMPT, Style::default().fg(MUTED_COLOR))),
        ),
        ResultsView::Completed if app.session.result().is_some_and(QueryResult::is_empty) => {
            render_centered(
                frame,
                grid.inner,
                Line::from(Span::styled(
                    "No ERC-20 tokens found for this address.",
                    Style::default().fg(MUTED_COLOR),
                )),
            );
        }
        ResultsView::Completed => render_grid(frame, grid.inner, grid.columns, grid.rows, app),
    }
}

fn panel_title(app: &App) -> String {
    match app.session.result() {
        Some(result) if app.session.view() == ResultsView::Completed => format!(
            "ERC-20 token balances ({}) · {}",
            result.len(),
            result.completed_at.format("%H:%M:%S")
        ),
        _ => "ERC-20 token balances".to_string(),
    }
}

#[must_use]
fn spinner_frame(tick: u64) -> &'static str {
    let index = usize::try_from(tick % SPINNER_FRAMES.len() as u64).unwrap_or(0);
    SPINNER_FRAMES[index]
}

fn render_centered(frame: &mut Frame, area: Rect, line: Line<'_>) {
    let y = area.y + area.height.saturating_sub(1) / 2;
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, 1),
    );
}

/// Lays out the visible window of cards, `columns` per row from `ui.grid_scroll`.
fn render_grid(frame: &mut Frame, area: Rect, columns: usize, rows: usize, app: &App) {
    let Some(result) = app.session.result() else {
        return;
    };

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows])
        .split(area);

    let column_count = u32::try_from(columns).unwrap_or(1);
    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let row = app.ui.grid_scroll + row_offset;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, column_count); columns])
            .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = row * columns + column;
            let Some(holding) = result.holding(index) else {
                return;
            };
            let card = TokenCard::new(holding).selected(focused_selection(app) == Some(index));
            frame.render_widget(card, *cell);
        }
    }

    let last_visible_row = app.ui.grid_scroll + rows;
    if last_visible_row * columns < result.len() {
        let more = result.len() - last_visible_row * columns;
        let hint = Paragraph::new(Line::from(Span::styled(
            format!(" +{more} more "),
            Style::default()
                .fg(MUTED_COLOR)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(
            hint,
            Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1),
        );
    }
}

/// The selected card is only highlighted while the grid has focus.
fn focused_selection(app: &App) -> Option<usize> {
    (!app.ui.is_input_focused()).then_some(app.ui.selected_card)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppMessage, Focus};
    use crate::test_utils::QueryResultMother;
    use crate::ui::test_support::{buffer_to_string, create_test_app};
    use chrono::{Local, TimeZone};
    use insta::assert_snapshot;
    use ratatui::{Terminal, backend::TestBackend};

    const W: u16 = 120;
    const H: u16 = 20;

    fn snapshot_terminal(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        terminal
    }

    /// Pins the completion time so the panel title is stable.
    fn completed_at_fixed(mut result: QueryResult) -> QueryResult {
        result.completed_at = Local.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
        result
    }

    fn render_results(app: &App) -> String {
        let backend = TestBackend::new(W, H);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer(), W, H)
    }

    fn complete(app: &mut App, result: QueryResult) {
        let ticket = app.session.start_query();
        app.apply_message(AppMessage::QuerySucceeded {
            id: ticket.id,
            result,
        });
    }

    #[test]
    fn test_prompt_before_first_query() {
        let app = create_test_app();
        assert!(render_results(&app).contains("Please make a query!"));
    }

    #[test]
    fn test_spinner_while_loading() {
        let mut app = create_test_app();
        app.session.start_query();
        app.animation_tick = 3;

        let content = render_results(&app);
        assert!(content.contains(SPINNER_FRAMES[3]));
        assert!(content.contains("Fetching token balances"));
        assert!(!content.contains("Please make a query!"));
    }

    #[test]
    fn test_grid_shows_cards_in_order() {
        let mut app = create_test_app();
        let address = app.session.address().to_string();
        complete(&mut app, QueryResultMother::weth_and_usdc(&address));

        let content = render_results(&app);
        assert!(content.contains("ERC-20 token balances (2)"));
        let weth = content.find("WETH").unwrap();
        let usdc = content.find("USDC").unwrap();
        assert!(weth < usdc);
        assert!(content.contains("1.0"));
        assert!(content.contains("0.5"));
    }

    #[test]
    fn test_empty_result_message() {
        let mut app = create_test_app();
        let address = app.session.address().to_string();
        complete(&mut app, QueryResultMother::empty(&address));

        let content = render_results(&app);
        assert!(content.contains("No ERC-20 tokens found"));
        assert!(content.contains("(0)"));
    }

    #[test]
    fn test_overflow_hint_and_scrolled_window() {
        let mut app = create_test_app();
        let address = app.session.address().to_string();
        complete(&mut app, QueryResultMother::many(&address, 12));
        app.ui.focus = Focus::Results;

        // 118 inner columns fit 4 cards; 18 inner rows fit 3 card rows.
        let content = render_results(&app);
        assert!(content.contains("T0"));
        assert!(!content.contains("+"), "all 12 cards fit: {content}");

        app.ui.grid_scroll = 1;
        let content = render_results(&app);
        assert!(!content.contains("T0 "));
        assert!(content.contains("T11"));
    }

    #[test]
    fn test_prompt_snapshot() {
        let app = create_test_app();
        let terminal = snapshot_terminal(&app);
        assert_snapshot!("results_prompt", terminal.backend());
    }

    #[test]
    fn test_loading_snapshot() {
        let mut app = create_test_app();
        app.session.start_query();
        app.animation_tick = 3;

        let terminal = snapshot_terminal(&app);
        assert_snapshot!("results_loading", terminal.backend());
    }

    #[test]
    fn test_completed_grid_snapshot() {
        let mut app = create_test_app();
        let address = app.session.address().to_string();
        complete(
            &mut app,
            completed_at_fixed(QueryResultMother::weth_and_usdc(&address)),
        );

        let terminal = snapshot_terminal(&app);
        assert_snapshot!("results_grid", terminal.backend());
    }

    #[test]
    fn test_empty_completed_snapshot() {
        let mut app = create_test_app();
        let address = app.session.address().to_string();
        complete(&mut app, completed_at_fixed(QueryResultMother::empty(&address)));

        let terminal = snapshot_terminal(&app);
        assert_snapshot!("results_empty", terminal.backend());
    }

    #[test]
    fn test_spinner_frame_wraps() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(10), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(u64::MAX), SPINNER_FRAMES[5]);
    }
}
