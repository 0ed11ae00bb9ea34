//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], a pure
//! function of the key and the current [`InputContext`]. The app state then
//! executes commands without knowing which key produced them.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//!
//! match command {
//!     AppCommand::Quit => app.exit = true,
//!     AppCommand::SubmitQuery => app.run_query(),
//!     // ...
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The address field has focus; printable keys edit it.
    AddressInput,
    /// The token grid has focus.
    Results,
    /// The key binding help popup is open.
    HelpPopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Ask the wallet for permission and read its account.
    ConnectWallet,
    /// Run a balance query for the current address.
    SubmitQuery,

    // === Popup/Focus Control ===
    /// Open the key binding help popup.
    ShowHelp,
    /// Close the current popup.
    Dismiss,
    /// Toggle focus between the address field and the token grid.
    CycleFocus,

    // === Address Editing ===
    /// Insert a character at the cursor.
    InsertChar(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    CursorLeft,
    /// Move the cursor one character right.
    CursorRight,
    /// Move the cursor to the start of the field.
    CursorHome,
    /// Move the cursor to the end of the field.
    CursorEnd,
    /// Clear the whole address field.
    ClearInput,

    // === Grid Navigation ===
    /// Select the card above.
    MoveUp,
    /// Select the card below.
    MoveDown,
    /// Select the previous card.
    MoveLeft,
    /// Select the next card.
    MoveRight,
    /// Select the first card.
    SelectFirst,
    /// Select the last card.
    SelectLast,

    // === Card Actions ===
    /// Copy the selected token's contract address to the clipboard.
    CopyContract,
    /// Open the selected token on the network's block explorer.
    OpenExplorer,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// Ctrl+C always quits, whatever the context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Self::map_control_keys(key, context);
        }

        match context {
            InputContext::AddressInput => Self::map_address_input_keys(key),
            InputContext::Results => Self::map_results_keys(key),
            InputContext::HelpPopup => Self::map_help_popup_keys(key),
        }
    }

    /// Maps Ctrl-chords.
    fn map_control_keys(key: KeyEvent, context: &InputContext) -> AppCommand {
        match (key.code, context) {
            (KeyCode::Char('c'), _) => AppCommand::Quit,
            (KeyCode::Char('w'), InputContext::AddressInput | InputContext::Results) => {
                AppCommand::ConnectWallet
            }
            (KeyCode::Char('u'), InputContext::AddressInput) => AppCommand::ClearInput,
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys while the address field has focus.
    fn map_address_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter => AppCommand::SubmitQuery,
            KeyCode::Esc | KeyCode::Tab | KeyCode::Down => AppCommand::CycleFocus,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Delete => AppCommand::Delete,
            KeyCode::Left => AppCommand::CursorLeft,
            KeyCode::Right => AppCommand::CursorRight,
            KeyCode::Home => AppCommand::CursorHome,
            KeyCode::End => AppCommand::CursorEnd,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                AppCommand::InsertChar(c)
            }
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys while the token grid has focus.
    fn map_results_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('c') => AppCommand::ConnectWallet,
            KeyCode::Enter | KeyCode::Char('r') => AppCommand::SubmitQuery,
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i' | '/') => AppCommand::CycleFocus,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Left | KeyCode::Char('h') => AppCommand::MoveLeft,
            KeyCode::Right | KeyCode::Char('l') => AppCommand::MoveRight,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::SelectFirst,
            KeyCode::End | KeyCode::Char('G') => AppCommand::SelectLast,
            KeyCode::Char('y') => AppCommand::CopyContract,
            KeyCode::Char('o') => AppCommand::OpenExplorer,
            KeyCode::Char('?') => AppCommand::ShowHelp,
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the help popup.
    fn map_help_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | ' ' | 'q') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
