//! The narrow interfaces through which the search field reaches the rest of
//! the notes window.

use crate::pipeline::QueryCompletion;

/// A note offered as an autocomplete target or read as the current
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
  pub title: String,
}

impl Candidate {
  pub fn new(title: impl Into<String>) -> Self {
    Self {
      title: title.into(),
    }
  }
}

/// Who asked for a new note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Originator {
  /// Return in the search field with no matching selected note. Carries the
  /// field text so the new note can be titled after it.
  SearchField { text: String },
}

/// Focus and selection side effects on sibling panels.
pub trait Navigator {
  fn focus_results_list(&mut self);
  fn select_next_result(&mut self);

  fn focus_navigation_panel(&mut self);
  fn select_navigation_row(&mut self, index: usize);

  fn focus_edit_area(&mut self);
  fn scroll_edit_area_to_caret(&mut self);

  fn selected_note(&self) -> Option<Candidate>;
  fn create_new_note(&mut self, originator: Originator);
}

/// The table filter the debounced queries end up in.
///
/// Implementations hand `completion` back through
/// [`crate::SearchField::query_completed`] once the table reflects `query`,
/// on the same context the field lives on.
pub trait QueryBackend {
  fn run_filter_query(&mut self, query: &str, interactive: bool, completion: QueryCompletion);
}
