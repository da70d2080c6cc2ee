use the_search_config::SearchConfig;
use the_search_event::{
  Clock,
  ManualClock,
};
use the_search_field::{
  Candidate,
  KeyOutcome,
  Navigator,
  Originator,
  QueryBackend,
  QueryCompletion,
  SearchField,
};

use crate::script::Step;

/// Logs every side effect the field asks of the window.
#[derive(Debug, Default)]
pub struct LoggingNavigator {
  pub selected: Option<Candidate>,
  pub effects:  Vec<String>,
}

impl LoggingNavigator {
  fn record(&mut self, effect: impl Into<String>) {
    let effect = effect.into();
    log::info!("navigator: {effect}");
    self.effects.push(effect);
  }
}

impl Navigator for LoggingNavigator {
  fn focus_results_list(&mut self) {
    self.record("focus results list");
  }

  fn select_next_result(&mut self) {
    self.record("select next result");
  }

  fn focus_navigation_panel(&mut self) {
    self.record("focus navigation panel");
  }

  fn select_navigation_row(&mut self, index: usize) {
    self.record(format!("select navigation row {index}"));
  }

  fn focus_edit_area(&mut self) {
    self.record("focus edit area");
  }

  fn scroll_edit_area_to_caret(&mut self) {
    self.record("scroll edit area to caret");
  }

  fn selected_note(&self) -> Option<Candidate> {
    self.selected.clone()
  }

  fn create_new_note(&mut self, originator: Originator) {
    let Originator::SearchField { text } = originator;
    self.record(format!("create note {text:?}"));
  }
}

/// Filters an in-memory list of titles by case-insensitive prefix.
#[derive(Debug)]
pub struct MemoryBackend {
  titles:   Vec<String>,
  finished: Vec<(QueryCompletion, Option<String>)>,
}

impl MemoryBackend {
  pub fn new(titles: Vec<String>) -> Self {
    Self {
      titles,
      finished: Vec::new(),
    }
  }

  fn first_match(&self, query: &str) -> Option<String> {
    let query = query.to_lowercase();
    self
      .titles
      .iter()
      .find(|title| title.to_lowercase().starts_with(&query))
      .cloned()
  }
}

impl QueryBackend for MemoryBackend {
  fn run_filter_query(&mut self, query: &str, interactive: bool, completion: QueryCompletion) {
    let top = self.first_match(query);
    log::info!("backend: query {query:?} (interactive: {interactive}) -> {top:?}");
    self.finished.push((completion, top));
  }
}

pub struct Session {
  pub field:   SearchField,
  pub nav:     LoggingNavigator,
  pub backend: MemoryBackend,
  clock:       ManualClock,
}

impl Session {
  pub fn new(config: SearchConfig, titles: Vec<String>) -> Self {
    Self {
      field:   SearchField::new(config),
      nav:     LoggingNavigator::default(),
      backend: MemoryBackend::new(titles),
      clock:   ManualClock::new(),
    }
  }

  pub fn run(&mut self, steps: &[Step]) {
    for step in steps {
      self.apply(step);
      self.settle_work();
    }
  }

  fn apply(&mut self, step: &Step) {
    let now = self.clock.now();
    match step {
      Step::Type(text) => self.field.insert_text(text, now),
      Step::KeyUp(key) => {
        let outcome = self.field.key_up(&mut self.nav, *key);
        log::debug!("key-up {:?} -> {outcome:?}", key.key);
      },
      Step::KeyEquivalent(key) => {
        let outcome = self.field.perform_key_equivalent(*key);
        log::debug!("key equivalent {key:?} -> {outcome:?}");
      },
      Step::Command(command) => {
        if self.field.do_command(&mut self.nav, *command, now) == KeyOutcome::Continue {
          log::debug!("command {command} falls through");
        }
      },
      Step::Select(title) => self.nav.selected = title.as_deref().map(Candidate::new),
      Step::Wait(ms) => {
        self.clock.advance_ms(*ms);
      },
    }
  }

  /// Pump due work and complete finished queries, offering the top match as
  /// autocomplete, until nothing is due at the current time.
  fn settle_work(&mut self) {
    loop {
      let now = self.clock.now();
      let polled = self.field.pump(&mut self.backend, now);
      let finished = std::mem::take(&mut self.backend.finished);
      if polled.issued.is_none() && !polled.settled && finished.is_empty() {
        break;
      }
      for (completion, top) in finished {
        self.field.query_completed(&completion, now);
        // An empty query matches every note; completing it would refill a
        // field the user just cleared.
        if let Some(title) = top
          && !completion.query.is_empty()
        {
          self.field.offer_suggestion(&Candidate::new(title));
        }
      }
    }
  }

  pub fn summary(&self) -> String {
    let selection = self.field.selection();
    format!(
      "text: {:?}\nselection: {}..{} ({:?})\nsearch query: {:?}\nsearch in progress: {}",
      self.field.text(),
      selection.start(),
      selection.end(),
      self.field.state().selected_text(),
      self.field.search_query(),
      self.field.search_in_progress(),
    )
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::script::parse_script;

  fn session(titles: &[&str]) -> Session {
    Session::new(
      SearchConfig::default(),
      titles.iter().map(|title| title.to_string()).collect(),
    )
  }

  #[test]
  fn typing_autocompletes_first_match() {
    let mut session = session(&["Groceries", "Project Plan", "Projects"]);
    session.run(&parse_script("type P\ntype r\ntype o").unwrap());

    assert_eq!(session.field.text(), "Project Plan");
    assert_eq!(session.field.selection().as_range(), 3..12);
    assert_eq!(session.field.search_query(), "Pro");
    assert!(session.field.search_in_progress());
  }

  #[test]
  fn backspace_does_not_reappend_suggestion() {
    let mut session = session(&["Project Plan"]);
    let script = "type Pro\ncmd deleteBackward:\nkey backspace";
    session.run(&parse_script(script).unwrap());

    assert_eq!(session.field.text(), "Pro");
    assert_eq!(session.field.search_query(), "Pro");
  }

  #[test]
  fn settles_after_a_second() {
    let mut session = session(&["Inbox"]);
    session.run(&parse_script("type I\nwait 999").unwrap());
    assert!(session.field.search_in_progress());
    session.run(&parse_script("wait 1").unwrap());
    assert!(!session.field.search_in_progress());
  }

  #[test]
  fn clearing_the_field_leaves_it_empty() {
    let mut session = session(&["Inbox", "Project Plan"]);
    session.run(&parse_script("type Zeb\ncmd deleteWordBackward:").unwrap());

    assert_eq!(session.field.text(), "");
    assert_eq!(session.field.search_query(), "");
  }

  #[test]
  fn return_with_unmatched_text_creates_note() {
    let mut session = session(&["Inbox"]);
    session.run(&parse_script("type Zebra\ncmd insertNewline:").unwrap());
    assert_eq!(session.nav.effects, vec!["create note \"Zebra\""]);
  }
}
