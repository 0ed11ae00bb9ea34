//! Card selection and grid scrolling.

use ratatui::layout::Rect;

use super::App;
use crate::domain::TokenHolding;
use crate::ui::layout::{calculate_app_layout, calculate_grid_layout};

impl App {
    /// Number of cards in the current result.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.session.result().map_or(0, |result| result.len())
    }

    /// The holding behind the selected card, if any.
    #[must_use]
    pub fn selected_holding(&self) -> Option<TokenHolding<'_>> {
        self.session
            .result()
            .and_then(|result| result.holding(self.ui.selected_card))
    }

    /// Records the grid geometry for a terminal of size `area`.
    pub(crate) fn sync_layout(&mut self, area: Rect) {
        let grid = calculate_grid_layout(calculate_app_layout(area).results);
        self.ui.grid_columns = grid.columns;
        self.ui.grid_rows = grid.rows;
        self.ui.select_card(self.ui.selected_card, self.card_count());
        self.ui.ensure_card_visible();
    }

    /// Selects card `index`, clamped to the result size.
    pub(crate) fn select_card(&mut self, index: usize) {
        self.ui.select_card(index, self.card_count());
        self.ui.ensure_card_visible();
    }

    /// Moves the selection by `delta` cards in reading order.
    pub(crate) fn move_selection_by(&mut self, delta: isize) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        let target = self.ui.selected_card.saturating_add_signed(delta);
        self.select_card(target.min(count - 1));
    }

    /// Moves the selection by `rows` grid rows, staying in the same column when possible.
    pub(crate) fn move_selection_rows(&mut self, rows: isize) {
        let columns = self.ui.grid_columns.max(1);
        let Some(delta) = rows.checked_mul(columns as isize) else {
            return;
        };
        if let Some(target) = self.ui.selected_card.checked_add_signed(delta)
            && target < self.card_count()
        {
            self.select_card(target);
        }
    }
}
