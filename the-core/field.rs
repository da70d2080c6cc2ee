//! Text, selection and the one-shot autocomplete suppression of a search
//! field.

use std::ops::Range;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
  chars::{
    CharCategory,
    categorize_char,
  },
  selection::Selection,
  utf16::{
    byte_to_utf16,
    utf16_len,
    utf16_to_byte,
  },
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
  #[error("selection {start}..{end} is out of bounds for a field of {len} code units")]
  SelectionOutOfBounds {
    start: usize,
    end:   usize,
    len:   usize,
  },
  #[error("offset {0} splits a surrogate pair")]
  NotOnCharBoundary(usize),
}

pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
  text:                  String,
  selection:             Selection,
  suppress_autocomplete: bool,
}

impl FieldState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_text(text: impl Into<String>) -> Self {
    let mut state = Self::new();
    state.set_text(text);
    state
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// Length of the text in UTF-16 code units.
  pub fn len_utf16(&self) -> usize {
    utf16_len(&self.text)
  }

  /// Replace the whole text. The caret moves to the end.
  pub fn set_text(&mut self, text: impl Into<String>) {
    self.text = text.into();
    self.selection = Selection::caret(self.len_utf16());
  }

  pub fn selection(&self) -> Selection {
    self.selection
  }

  pub fn set_selection(&mut self, selection: impl Into<Selection>) -> Result<()> {
    let selection = selection.into();
    let len = self.len_utf16();
    if !selection.fits(len) {
      return Err(FieldError::SelectionOutOfBounds {
        start: selection.start(),
        end: selection.end(),
        len,
      });
    }
    for offset in [selection.start(), selection.end()] {
      if utf16_to_byte(&self.text, offset).is_none() {
        return Err(FieldError::NotOnCharBoundary(offset));
      }
    }
    self.selection = selection;
    Ok(())
  }

  pub fn selected_text(&self) -> &str {
    &self.text[self.selection_bytes()]
  }

  pub fn suppress_autocomplete(&self) -> bool {
    self.suppress_autocomplete
  }

  pub fn set_suppress_autocomplete(&mut self, suppress: bool) {
    self.suppress_autocomplete = suppress;
  }

  /// Clear the suppression flag, returning whether it was set.
  pub fn take_suppress_autocomplete(&mut self) -> bool {
    std::mem::take(&mut self.suppress_autocomplete)
  }

  /// Replace the selection with `insert`, leaving the caret after it.
  pub fn insert_str(&mut self, insert: &str) {
    let range = self.selection_bytes();
    self.replace_bytes(range, insert);
  }

  /// Delete the selection, or the grapheme cluster before the caret.
  ///
  /// Returns whether the text changed.
  pub fn delete_backward(&mut self) -> bool {
    if !self.selection.is_empty() {
      self.replace_bytes(self.selection_bytes(), "");
      return true;
    }

    let caret = self.selection_bytes().start;
    let Some((start, _)) = self.text[..caret].grapheme_indices(true).next_back() else {
      return false;
    };
    self.replace_bytes(start..caret, "");
    true
  }

  /// Delete the selection, or the word before the caret together with any
  /// whitespace between the word and the caret.
  ///
  /// Returns whether the text changed.
  pub fn delete_word_backward(&mut self) -> bool {
    if !self.selection.is_empty() {
      self.replace_bytes(self.selection_bytes(), "");
      return true;
    }

    let caret = self.selection_bytes().start;
    let mut chars = self.text[..caret].char_indices().rev().peekable();
    let mut start = caret;

    while let Some(&(idx, ch)) = chars.peek() {
      if !matches!(
        categorize_char(ch),
        CharCategory::Whitespace | CharCategory::Eol
      ) {
        break;
      }
      start = idx;
      chars.next();
    }

    if let Some(&(_, first)) = chars.peek() {
      let category = categorize_char(first);
      while let Some(&(idx, ch)) = chars.peek() {
        if categorize_char(ch) != category {
          break;
        }
        start = idx;
        chars.next();
      }
    }

    if start == caret {
      return false;
    }
    self.replace_bytes(start..caret, "");
    true
  }

  fn selection_bytes(&self) -> Range<usize> {
    let end_of_text = self.text.len();
    let start = utf16_to_byte(&self.text, self.selection.start()).unwrap_or(end_of_text);
    let end = utf16_to_byte(&self.text, self.selection.end()).unwrap_or(end_of_text);
    start..end
  }

  fn replace_bytes(&mut self, range: Range<usize>, with: &str) {
    let caret = range.start + with.len();
    self.text.replace_range(range, with);
    self.selection = Selection::caret(byte_to_utf16(&self.text, caret));
  }
}
