//! UI state management.
//!
//! Presentation-only concerns: which widget has focus, where the cursor
//! sits in the address field, which card is selected, toasts and the help
//! popup. The address text itself lives in [`super::QuerySession`]; edits are
//! computed here and committed there so every change goes through the
//! session's clearing transition.

// ============================================================================
// Focus
// ============================================================================

/// Represents which widget currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The address field has focus.
    #[default]
    AddressInput,
    /// The token grid has focus.
    Results,
}

impl Focus {
    /// Cycles to the next focus target.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::AddressInput => Self::Results,
            Self::Results => Self::AddressInput,
        }
    }
}

// ============================================================================
// Address Editing
// ============================================================================

/// A text-changing edit of the address field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressEdit {
    /// Insert one character at the cursor.
    Insert(char),
    /// Insert pasted text at the cursor. Line breaks are dropped.
    Paste(String),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Remove everything.
    Clear,
}

/// A cursor movement that leaves the text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Home,
    End,
}

/// Byte offset of the `char_pos`-th character, or the end of `text`.
fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(i, _)| i)
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, cursor, card selection, toast and help visibility.
#[derive(Debug, Default)]
pub struct UiState {
    // === Focus ===
    /// Which widget currently has focus.
    pub focus: Focus,

    // === Address Field ===
    /// Cursor position in the address field, in characters.
    pub cursor: usize,

    // === Token Grid ===
    /// Index of the selected card.
    pub selected_card: usize,
    /// First visible card row.
    pub grid_scroll: usize,
    /// Column count for the current terminal size; drives up/down navigation.
    pub grid_columns: usize,
    /// Card rows that fit on screen.
    pub grid_rows: usize,

    // === Toast Notifications ===
    /// Toast notification message and remaining ticks.
    pub toast: Option<(String, u8)>,

    // === Help Popup ===
    /// Whether the help popup is visible.
    pub show_help: bool,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid_columns: 1,
            grid_rows: 1,
            ..Self::default()
        }
    }

    // ========================================================================
    // Focus Management
    // ========================================================================

    /// Toggles focus between the address field and the grid.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Returns `true` if the address field has focus.
    #[must_use]
    pub fn is_input_focused(&self) -> bool {
        self.focus == Focus::AddressInput
    }

    // ========================================================================
    // Address Editing
    // ========================================================================

    /// Applies `edit` to `text` at the cursor.
    ///
    /// Returns the new text, or `None` if the edit changed nothing (e.g.
    /// backspace at the start).
    #[must_use]
    pub fn apply_edit(&mut self, text: &str, edit: AddressEdit) -> Option<String> {
        let len = text.chars().count();
        let cursor = self.cursor.min(len);
        let at = byte_offset(text, cursor);
        let mut next = text.to_string();

        match edit {
            AddressEdit::Insert(c) => {
                next.insert(at, c);
                self.cursor = cursor + 1;
            }
            AddressEdit::Paste(pasted) => {
                let clean: String = pasted.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
                if clean.is_empty() {
                    return None;
                }
                next.insert_str(at, &clean);
                self.cursor = cursor + clean.chars().count();
            }
            AddressEdit::Backspace => {
                if cursor == 0 {
                    return None;
                }
                next.remove(byte_offset(text, cursor - 1));
                self.cursor = cursor - 1;
            }
            AddressEdit::Delete => {
                if cursor >= len {
                    return None;
                }
                next.remove(at);
                self.cursor = cursor;
            }
            AddressEdit::Clear => {
                if text.is_empty() {
                    return None;
                }
                next.clear();
                self.cursor = 0;
            }
        }

        Some(next)
    }

    /// Moves the cursor within `text`.
    pub fn move_cursor(&mut self, text: &str, movement: CursorMove) {
        let len = text.chars().count();
        let cursor = self.cursor.min(len);
        self.cursor = match movement {
            CursorMove::Left => cursor.saturating_sub(1),
            CursorMove::Right => (cursor + 1).min(len),
            CursorMove::Home => 0,
            CursorMove::End => len,
        };
    }

    /// Places the cursor after the last character of `text`.
    pub fn cursor_to_end(&mut self, text: &str) {
        self.cursor = text.chars().count();
    }

    // ========================================================================
    // Grid Selection
    // ========================================================================

    /// Resets selection and scroll for a fresh result set.
    pub fn reset_grid(&mut self) {
        self.selected_card = 0;
        self.grid_scroll = 0;
    }

    /// Selects `index`, clamped to `count` cards.
    pub fn select_card(&mut self, index: usize, count: usize) {
        self.selected_card = if count == 0 {
            0
        } else {
            index.min(count - 1)
        };
    }

    /// Adjusts the scroll so the selected card's row is on screen.
    pub fn ensure_card_visible(&mut self) {
        let columns = self.grid_columns.max(1);
        let visible_rows = self.grid_rows.max(1);
        let row = self.selected_card / columns;

        if row < self.grid_scroll {
            self.grid_scroll = row;
        } else if row >= self.grid_scroll + visible_rows {
            self.grid_scroll = row + 1 - visible_rows;
        }
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification that disappears after `ticks` ticks.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// Returns `true` if the toast was removed.
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Help Popup
    // ========================================================================

    /// Toggles the help popup.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

// ============================================================================
// Tests
// ============================================================================
