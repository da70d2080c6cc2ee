//! Key and edit-command routing for the search field.
//!
//! Three entry points mirror the three stages a key passes through:
//! [`SearchField::perform_key_equivalent`] runs before the field edits
//! anything, [`SearchField::do_command`] receives the editing intent the
//! platform resolved the key into, and [`SearchField::key_up`] runs once the
//! key is released.

use std::time::Instant;

use the_search_core::{
  EditCommand,
  Key,
  KeyEvent,
  utf16::starts_with_ignore_case,
};

use crate::{
  SearchField,
  navigator::{
    Navigator,
    Originator,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOutcome {
  /// Fall through to the default behavior.
  #[default]
  Continue,
  /// Fully handled; suppress the default behavior.
  Handled,
}

impl KeyOutcome {
  #[must_use]
  pub const fn handled(self) -> bool {
    matches!(self, Self::Handled)
  }
}

impl SearchField {
  pub fn key_up<N: Navigator + ?Sized>(&mut self, nav: &mut N, key: KeyEvent) -> KeyOutcome {
    // Autocomplete suppression only survives until the next key-up, whatever
    // the key.
    if self.state.take_suppress_autocomplete() {
      tracing::trace!("autocomplete suppression reset");
    }

    match key.key {
      Key::Down => {
        tracing::debug!("focus -> results list");
        nav.focus_results_list();
        nav.select_next_result();
        KeyOutcome::Handled
      },
      Key::Left if self.state.is_empty() => {
        let row = self.ctx.config.navigation_row;
        tracing::debug!(row, "focus -> navigation panel");
        nav.focus_navigation_panel();
        nav.select_navigation_row(row);
        KeyOutcome::Handled
      },
      Key::Enter | Key::NumpadEnter => {
        tracing::debug!("focus -> edit area");
        nav.focus_edit_area();
        KeyOutcome::Handled
      },
      _ => KeyOutcome::Continue,
    }
  }

  /// Intercept shortcuts before the field sees them as text input.
  pub fn perform_key_equivalent(&mut self, key: KeyEvent) -> KeyOutcome {
    let clears_query = key.key == Key::Escape
      || (key.modifiers.command() && (key.key.is_letter('l') || key.key.is_letter('n')));

    if clears_query {
      self.search_query.clear();
      return KeyOutcome::Handled;
    }
    KeyOutcome::Continue
  }

  pub fn do_command<N: Navigator + ?Sized>(
    &mut self,
    nav: &mut N,
    command: EditCommand,
    now: Instant,
  ) -> KeyOutcome {
    tracing::trace!(%command, "edit command");
    match command {
      EditCommand::CancelOperation => {},
      EditCommand::DeleteBackward => {
        self.state.set_suppress_autocomplete(true);
        if self.state.delete_backward() {
          self.text_did_change(now);
        }
      },
      EditCommand::DeleteWordBackward => {
        if self.state.delete_word_backward() {
          self.text_did_change(now);
        }
      },
      EditCommand::InsertNewline => {
        let opens_selected = !self.state.is_empty()
          && nav
            .selected_note()
            .is_some_and(|note| starts_with_ignore_case(&note.title, &self.search_query));

        if opens_selected {
          nav.focus_edit_area();
        } else {
          tracing::debug!(title = self.state.text(), "creating note from search");
          nav.create_new_note(Originator::SearchField {
            text: self.state.text().to_string(),
          });
        }
      },
      EditCommand::InsertTab => {
        nav.focus_edit_area();
        nav.scroll_edit_area_to_caret();
      },
      EditCommand::Other => return KeyOutcome::Continue,
    }
    KeyOutcome::Handled
  }
}
