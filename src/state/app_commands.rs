//! Command execution and input handling.
//!
//! Key events are mapped to [`AppCommand`]s by [`KeyMapper`] and executed
//! here. Bracketed paste events go straight to the address field.

use crossterm::event::KeyEvent;

use super::{AddressEdit, App, CursorMove, Focus};
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Inserts pasted text into the address field.
    ///
    /// Pasting while the grid has focus moves focus to the field first.
    pub(crate) fn handle_paste(&mut self, text: String) {
        if self.ui.show_help {
            return;
        }
        self.ui.focus = Focus::AddressInput;
        self.edit_address(AddressEdit::Paste(text));
    }

    /// Determines the current input context based on application state.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }
        match self.ui.focus {
            Focus::AddressInput => InputContext::AddressInput,
            Focus::Results => InputContext::Results,
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => self.exit = true,
            AppCommand::ConnectWallet => self.connect_wallet(),
            AppCommand::SubmitQuery => self.run_query(),

            // === Popup/Focus Control ===
            AppCommand::ShowHelp | AppCommand::Dismiss => self.ui.toggle_help(),
            AppCommand::CycleFocus => self.ui.cycle_focus(),

            // === Address Editing ===
            AppCommand::InsertChar(c) => self.edit_address(AddressEdit::Insert(c)),
            AppCommand::Backspace => self.edit_address(AddressEdit::Backspace),
            AppCommand::Delete => self.edit_address(AddressEdit::Delete),
            AppCommand::ClearInput => self.edit_address(AddressEdit::Clear),
            AppCommand::CursorLeft => self.move_cursor(CursorMove::Left),
            AppCommand::CursorRight => self.move_cursor(CursorMove::Right),
            AppCommand::CursorHome => self.move_cursor(CursorMove::Home),
            AppCommand::CursorEnd => self.move_cursor(CursorMove::End),

            // === Grid Navigation ===
            AppCommand::MoveUp => self.move_selection_rows(-1),
            AppCommand::MoveDown => self.move_selection_rows(1),
            AppCommand::MoveLeft => self.move_selection_by(-1),
            AppCommand::MoveRight => self.move_selection_by(1),
            AppCommand::SelectFirst => self.select_card(0),
            AppCommand::SelectLast => self.select_card(usize::MAX),

            // === Card Actions ===
            AppCommand::CopyContract => self.copy_selected_contract(),
            AppCommand::OpenExplorer => self.open_selected_in_explorer(),

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Address Field
    // ========================================================================

    /// Applies a text edit and commits it through the session.
    pub(crate) fn edit_address(&mut self, edit: AddressEdit) {
        let Some(next) = self.ui.apply_edit(self.session.address(), edit) else {
            return;
        };
        if let Some(superseded) = self.session.edit_address(next) {
            tracing::debug!("address edited; superseding query #{superseded}");
            self.abort_query_task();
        }
        self.ui.reset_grid();
    }

    fn move_cursor(&mut self, movement: CursorMove) {
        self.ui.move_cursor(self.session.address(), movement);
    }
}
