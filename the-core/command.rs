use std::{
  convert::Infallible,
  fmt,
  str::FromStr,
};

/// Edit commands issued by the text-editing layer beneath the field.
///
/// These arrive after the platform has resolved raw keys into editing intent,
/// e.g. `deleteBackward:` for Backspace or `insertNewline:` for Return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditCommand {
  CancelOperation,
  DeleteBackward,
  DeleteWordBackward,
  /// Plain newline and the field-editor-ignoring variant.
  InsertNewline,
  InsertTab,
  Other,
}

impl EditCommand {
  /// Resolve a platform selector name such as `"deleteBackward:"`.
  pub fn from_selector(selector: &str) -> Self {
    match selector {
      "cancelOperation:" => Self::CancelOperation,
      "deleteBackward:" => Self::DeleteBackward,
      "deleteWordBackward:" => Self::DeleteWordBackward,
      "insertNewline:" | "insertNewlineIgnoringFieldEditor:" => Self::InsertNewline,
      "insertTab:" => Self::InsertTab,
      _ => Self::Other,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::CancelOperation => "cancel_operation",
      Self::DeleteBackward => "delete_backward",
      Self::DeleteWordBackward => "delete_word_backward",
      Self::InsertNewline => "insert_newline",
      Self::InsertTab => "insert_tab",
      Self::Other => "other",
    }
  }
}

impl FromStr for EditCommand {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let command = match s {
      "cancel_operation" => Self::CancelOperation,
      "delete_backward" => Self::DeleteBackward,
      "delete_word_backward" => Self::DeleteWordBackward,
      "insert_newline" => Self::InsertNewline,
      "insert_tab" => Self::InsertTab,
      selector => Self::from_selector(selector),
    };
    Ok(command)
  }
}

impl fmt::Display for EditCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod test {
  use super::EditCommand;

  #[test]
  fn selectors_resolve_to_commands() {
    assert_eq!(
      EditCommand::from_selector("insertNewlineIgnoringFieldEditor:"),
      EditCommand::InsertNewline
    );
    assert_eq!(
      EditCommand::from_selector("deleteWordBackward:"),
      EditCommand::DeleteWordBackward
    );
    assert_eq!(
      EditCommand::from_selector("moveToEndOfLine:"),
      EditCommand::Other
    );
  }

  #[test]
  fn names_and_selectors_both_parse() {
    assert_eq!(
      "insert_tab".parse::<EditCommand>(),
      Ok(EditCommand::InsertTab)
    );
    assert_eq!(
      "cancelOperation:".parse::<EditCommand>(),
      Ok(EditCommand::CancelOperation)
    );
  }
}
