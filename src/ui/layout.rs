//! Layout calculations.
//!
//! Shared between rendering and state so the card grid's column and row
//! counts used for keyboard navigation always match what is drawn.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use crate::constants::{
    ADDRESS_BAR_HEIGHT, FOOTER_HEIGHT, GridGeometry, HEADER_HEIGHT, STATUS_HEIGHT,
};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title, network and connect control.
    pub header: Rect,
    /// Address field.
    pub address: Rect,
    /// Error line and query hint.
    pub status: Rect,
    /// Spinner, card grid or prompt.
    pub results: Rect,
    /// Key hints.
    pub footer: Rect,
}

/// Card grid dimensions for a results area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Area inside the results border.
    pub inner: Rect,
    /// Number of card columns.
    pub columns: usize,
    /// Number of card rows that fit.
    pub rows: usize,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(ADDRESS_BAR_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        address: chunks[1],
        status: chunks[2],
        results: chunks[3],
        footer: chunks[4],
    }
}

/// Calculate the card grid inside a bordered results area.
#[must_use]
pub fn calculate_grid_layout(results: Rect) -> GridLayout {
    let inner = results.inner(Margin::new(1, 1));
    let geometry = GridGeometry::default();

    GridLayout {
        inner,
        columns: geometry.columns(inner.width),
        rows: geometry.visible_rows(inner.height),
    }
}

/// Calculate a centered popup area within a parent area.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_app_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_app_layout(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.address.height, ADDRESS_BAR_HEIGHT);
        assert_eq!(layout.status.height, STATUS_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(
            layout.results.height,
            40 - HEADER_HEIGHT - ADDRESS_BAR_HEIGHT - STATUS_HEIGHT - FOOTER_HEIGHT
        );
        assert_eq!(layout.footer.y, 39);
    }

    #[test]
    fn test_grid_layout_wide_terminal() {
        let grid = calculate_grid_layout(Rect::new(0, 0, 160, 26));
        assert_eq!(grid.inner, Rect::new(1, 1, 158, 24));
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.rows, 4);
    }

    #[test]
    fn test_grid_layout_narrow_terminal() {
        let grid = calculate_grid_layout(Rect::new(0, 0, 40, 8));
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 1);
    }

    #[test]
    fn test_centered_popup_area() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup_area(parent, 40, 20);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_area_clamped() {
        let parent = Rect::new(0, 0, 30, 20);
        let popup = centered_popup_area(parent, 100, 50);

        assert!(popup.width <= parent.width - 4);
        assert!(popup.height <= parent.height - 4);
    }
}
