//! The replay script format.
//!
//! ```text
//! # comments and blank lines are skipped; a trailing comment needs at
//! # least two spaces before its '#', so `type #tag` types "#tag"
//! type Pro          # type text over the selection
//! key down          # key-up of a named key
//! equiv cmd+l       # key equivalent, modifiers joined with '+'
//! cmd deleteBackward:
//! select Project Plan
//! wait 1000         # advance the clock, in milliseconds
//! ```

use std::str::FromStr;

use the_search_field::{
  EditCommand,
  Key,
  KeyEvent,
  Modifiers,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
  Type(String),
  KeyUp(KeyEvent),
  KeyEquivalent(KeyEvent),
  Command(EditCommand),
  Select(Option<String>),
  Wait(u64),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
  pub line:    usize,
  pub message: String,
}

pub fn parse_script(source: &str) -> Result<Vec<Step>, ScriptError> {
  source
    .lines()
    .enumerate()
    .filter_map(|(idx, line)| {
      let line = line.split("  #").next().unwrap_or_default().trim();
      (!line.is_empty() && !line.starts_with('#')).then_some((idx + 1, line))
    })
    .map(|(line, text)| {
      parse_step(text).map_err(|message| ScriptError { line, message })
    })
    .collect()
}

fn parse_step(text: &str) -> Result<Step, String> {
  let (verb, rest) = text.split_once(' ').unwrap_or((text, ""));
  let rest = rest.trim();
  match verb {
    "type" => Ok(Step::Type(rest.to_string())),
    "key" => parse_key_event(rest).map(Step::KeyUp),
    "equiv" => parse_key_event(rest).map(Step::KeyEquivalent),
    "cmd" if !rest.is_empty() => {
      let Ok(command) = EditCommand::from_str(rest);
      Ok(Step::Command(command))
    },
    "select" => Ok(Step::Select((!rest.is_empty()).then(|| rest.to_string()))),
    "wait" => {
      rest
        .parse()
        .map(Step::Wait)
        .map_err(|err| format!("invalid wait '{rest}': {err}"))
    },
    _ => Err(format!("unknown step '{text}'")),
  }
}

fn parse_key_event(combo: &str) -> Result<KeyEvent, String> {
  let mut parts: Vec<&str> = combo.split('+').map(str::trim).collect();
  let Some(name) = parts.pop().filter(|name| !name.is_empty()) else {
    return Err(format!("missing key in '{combo}'"));
  };

  let mut modifiers = Modifiers::empty();
  for part in parts {
    let bits = match part.to_ascii_lowercase().as_str() {
      "cmd" | "command" | "super" => Modifiers::COMMAND,
      "ctrl" | "control" => Modifiers::CTRL,
      "alt" | "option" => Modifiers::ALT,
      "shift" => Modifiers::SHIFT,
      other => return Err(format!("unknown modifier '{other}'")),
    };
    modifiers.insert(bits);
  }

  let key = parse_key(name).ok_or_else(|| format!("unknown key '{name}'"))?;
  Ok(KeyEvent::new(key).with_modifiers(modifiers))
}

fn parse_key(name: &str) -> Option<Key> {
  let mut chars = name.chars();
  if let (Some(ch), None) = (chars.next(), chars.next()) {
    return Some(Key::Char(ch));
  }
  let key = match name.to_ascii_lowercase().as_str() {
    "enter" | "return" => Key::Enter,
    "escape" | "esc" => Key::Escape,
    "backspace" => Key::Backspace,
    "tab" => Key::Tab,
    "delete" | "del" => Key::Delete,
    "home" => Key::Home,
    "end" => Key::End,
    "pageup" => Key::PageUp,
    "pagedown" => Key::PageDown,
    "left" => Key::Left,
    "right" => Key::Right,
    "up" => Key::Up,
    "down" => Key::Down,
    _ => return None,
  };
  Some(key)
}
