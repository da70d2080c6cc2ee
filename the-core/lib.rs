//! Editing primitives for the notes search field.
//!
//! Everything here is synchronous and free of UI concerns: the text and
//! selection model (selections in UTF-16 code units), the key model, and
//! the closed set of edit commands the field reacts to.

pub mod chars;
pub mod command;
pub mod field;
pub mod input;
pub mod selection;
pub mod utf16;

pub use command::EditCommand;
pub use field::{
  FieldError,
  FieldState,
};
pub use input::{
  Key,
  KeyEvent,
  Modifiers,
};
pub use selection::Selection;
