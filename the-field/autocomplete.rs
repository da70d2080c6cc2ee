use the_search_core::{
  FieldState,
  utf16::{
    starts_with_ignore_case,
    utf16_len,
    utf16_to_byte,
  },
};

/// Complete the typed text to `title`, selecting the appended part so the
/// next keystroke replaces it.
///
/// The typed characters are kept as typed; only the rest of the title is
/// appended. Titles that do not extend the typed text (ignoring case) are
/// dropped, as is a title equal to the text. Returns whether the field
/// changed.
pub fn suggest(state: &mut FieldState, title: &str) -> bool {
  let typed = state.text();
  if title == typed || !starts_with_ignore_case(title, typed) {
    return false;
  }

  let prefix_len = utf16_len(typed);
  // Lowercasing can change lengths, so the typed length may not land on a
  // char boundary of the title.
  let Some(suffix_start) = utf16_to_byte(title, prefix_len) else {
    tracing::debug!(title, typed, "suggestion does not align with typed text");
    return false;
  };

  let completed = format!("{typed}{}", &title[suffix_start..]);
  let title_len = utf16_len(title);
  state.set_text(completed);
  if let Err(err) = state.set_selection((prefix_len, title_len)) {
    tracing::warn!(%err, "could not select autocompleted suffix");
  }
  true
}

#[cfg(test)]
mod test {
  use the_search_core::Selection;

  use super::*;

  #[test]
  fn keeps_typed_case() {
    let mut state = FieldState::with_text("pro");
    assert!(suggest(&mut state, "Project Plan"));
    assert_eq!(state.text(), "project Plan");
    assert_eq!(state.selection(), Selection::new(3, 12));
  }

  #[test]
  fn measures_in_utf16_units() {
    let mut state = FieldState::with_text("😀 a");
    assert!(suggest(&mut state, "😀 agenda"));
    assert_eq!(state.selection(), Selection::new(4, 9));
    assert_eq!(state.selected_text(), "genda");
  }

  #[test]
  fn empty_field_selects_whole_title() {
    let mut state = FieldState::new();
    assert!(suggest(&mut state, "Inbox"));
    assert_eq!(state.selection(), Selection::new(0, 5));
  }

  #[test]
  fn misaligned_lowercase_is_dropped() {
    // "İ" lowercases to two chars, so the typed "i̇" matches it while being
    // one code unit longer and landing inside the emoji.
    let mut state = FieldState::with_text("i\u{307}");
    assert!(!suggest(&mut state, "\u{130}\u{1F600}"));
    assert_eq!(state.text(), "i\u{307}");
  }
}
