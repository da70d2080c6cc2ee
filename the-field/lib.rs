//! Incremental search field for the notes window.
//!
//! The field filters the notes table as the user types, autocompletes the
//! best matching title inline, and moves focus to the neighbouring panels
//! on navigation keys. Everything outside the field (the table, the outline,
//! the editor) is reached through [`Navigator`] and [`QueryBackend`].
//!
//! ```
//! use the_search_config::SearchConfig;
//! use the_search_field::SearchField;
//!
//! let mut field = SearchField::new(SearchConfig::default());
//! field.set_text("Pro");
//! assert!(field.suggest("Project Plan"));
//! assert_eq!(field.text(), "Project Plan");
//! assert_eq!(field.selection().as_range(), 3..12);
//! ```

pub mod autocomplete;
mod context;
mod field;
pub mod handlers;
mod navigator;
pub mod pipeline;
pub mod router;

pub use context::SearchContext;
pub use field::SearchField;
pub use navigator::{
  Candidate,
  Navigator,
  Originator,
  QueryBackend,
};
pub use pipeline::{
  PollResult,
  QueryCompletion,
  SETTLE_DELAY,
};
pub use router::KeyOutcome;
pub use the_search_core::{
  EditCommand,
  Key,
  KeyEvent,
  Modifiers,
};
