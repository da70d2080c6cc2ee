#![allow(dead_code)]

use std::time::Instant;

use the_search_config::SearchConfig;
use the_search_event::{
  Clock,
  ManualClock,
};
use the_search_field::{
  Candidate,
  Navigator,
  Originator,
  QueryBackend,
  QueryCompletion,
  SearchField,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  FocusResults,
  SelectNextResult,
  FocusNavigation,
  SelectNavigationRow(usize),
  FocusEditArea,
  ScrollToCaret,
  CreateNote(Originator),
}

#[derive(Debug, Default)]
pub struct FakeNavigator {
  pub calls:    Vec<Call>,
  pub selected: Option<Candidate>,
}

impl FakeNavigator {
  pub fn with_selected(title: &str) -> Self {
    Self {
      calls:    Vec::new(),
      selected: Some(Candidate::new(title)),
    }
  }
}

impl Navigator for FakeNavigator {
  fn focus_results_list(&mut self) {
    self.calls.push(Call::FocusResults);
  }

  fn select_next_result(&mut self) {
    self.calls.push(Call::SelectNextResult);
  }

  fn focus_navigation_panel(&mut self) {
    self.calls.push(Call::FocusNavigation);
  }

  fn select_navigation_row(&mut self, index: usize) {
    self.calls.push(Call::SelectNavigationRow(index));
  }

  fn focus_edit_area(&mut self) {
    self.calls.push(Call::FocusEditArea);
  }

  fn scroll_edit_area_to_caret(&mut self) {
    self.calls.push(Call::ScrollToCaret);
  }

  fn selected_note(&self) -> Option<Candidate> {
    self.selected.clone()
  }

  fn create_new_note(&mut self, originator: Originator) {
    self.calls.push(Call::CreateNote(originator));
  }
}

/// Records every query; completions are handed back by the test.
#[derive(Debug, Default)]
pub struct FakeBackend {
  pub queries:     Vec<(String, bool)>,
  pub completions: Vec<QueryCompletion>,
}

impl QueryBackend for FakeBackend {
  fn run_filter_query(&mut self, query: &str, interactive: bool, completion: QueryCompletion) {
    self.queries.push((query.to_string(), interactive));
    self.completions.push(completion);
  }
}

impl FakeBackend {
  pub fn issued(&self) -> Vec<&str> {
    self.queries.iter().map(|(query, _)| query.as_str()).collect()
  }
}

pub struct Harness {
  pub field:   SearchField,
  pub nav:     FakeNavigator,
  pub backend: FakeBackend,
  pub clock:   ManualClock,
}

impl Harness {
  pub fn new() -> Self {
    Self::with_config(SearchConfig::default())
  }

  pub fn with_config(config: SearchConfig) -> Self {
    Self {
      field:   SearchField::new(config),
      nav:     FakeNavigator::default(),
      backend: FakeBackend::default(),
      clock:   ManualClock::new(),
    }
  }

  pub fn now(&self) -> Instant {
    self.clock.now()
  }

  pub fn type_text(&mut self, text: &str) {
    let now = self.now();
    self.field.insert_text(text, now);
  }

  pub fn pump(&mut self) {
    let now = self.now();
    self.field.pump(&mut self.backend, now);
  }

  pub fn complete_all(&mut self) {
    let now = self.now();
    for completion in std::mem::take(&mut self.backend.completions) {
      self.field.query_completed(&completion, now);
    }
  }
}
