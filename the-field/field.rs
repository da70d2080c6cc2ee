use std::time::Instant;

use the_search_config::SearchConfig;
use the_search_core::{
  FieldError,
  FieldState,
  Selection,
};

use crate::{
  autocomplete,
  context::SearchContext,
  navigator::{
    Candidate,
    QueryBackend,
  },
  pipeline::{
    PollResult,
    QueryCompletion,
    QueryPipeline,
  },
};

/// The notes search field: text state, the stored query, and the debounced
/// query pipeline.
///
/// Key handling lives in [`crate::router`]. All methods must be called from
/// the one context that owns the field; `now` comes from the host clock.
#[derive(Debug, Default)]
pub struct SearchField {
  pub(crate) state:        FieldState,
  pub(crate) search_query: String,
  pub(crate) pipeline:     QueryPipeline,
  pub(crate) ctx:          SearchContext,
}

impl SearchField {
  pub fn new(config: SearchConfig) -> Self {
    Self {
      state:        FieldState::new(),
      search_query: String::new(),
      pipeline:     QueryPipeline::new(),
      ctx:          SearchContext::new(config),
    }
  }

  pub fn state(&self) -> &FieldState {
    &self.state
  }

  pub fn text(&self) -> &str {
    self.state.text()
  }

  /// Replace the text without treating it as an edit: no query is queued.
  pub fn set_text(&mut self, text: impl Into<String>) {
    self.state.set_text(text);
  }

  pub fn selection(&self) -> Selection {
    self.state.selection()
  }

  pub fn set_selection(&mut self, selection: impl Into<Selection>) -> Result<(), FieldError> {
    self.state.set_selection(selection)
  }

  /// The query the table was last filtered by.
  pub fn search_query(&self) -> &str {
    &self.search_query
  }

  pub fn set_search_query(&mut self, query: impl Into<String>) {
    self.search_query = query.into();
  }

  pub fn context(&self) -> &SearchContext {
    &self.ctx
  }

  pub fn context_mut(&mut self) -> &mut SearchContext {
    &mut self.ctx
  }

  pub fn search_in_progress(&self) -> bool {
    self.ctx.search_in_progress
  }

  pub fn pipeline(&self) -> &QueryPipeline {
    &self.pipeline
  }

  /// Type `text` over the selection, as the user would.
  pub fn insert_text(&mut self, text: &str, now: Instant) {
    self.state.insert_str(text);
    self.text_did_change(now);
  }

  /// Notify the field that its text was edited.
  pub fn text_did_change(&mut self, now: Instant) {
    self
      .pipeline
      .text_did_change(&mut self.ctx, self.state.text(), now);
  }

  /// Run whatever the pipeline has due: fire the settle timer and hand the
  /// queued query to `backend`.
  pub fn pump<B: QueryBackend + ?Sized>(&mut self, backend: &mut B, now: Instant) -> PollResult {
    let result = self.pipeline.poll(&mut self.ctx, now);
    if let Some(completion) = &result.issued {
      self.search_query.clone_from(&completion.query);
      tracing::debug!(query = %completion.query, "running filter query");
      backend.run_filter_query(&completion.query, true, completion.clone());
    }
    result
  }

  pub fn query_completed(&mut self, completion: &QueryCompletion, now: Instant) {
    self.pipeline.complete(&mut self.ctx, completion, now);
  }

  pub fn next_deadline(&self) -> Option<Instant> {
    self.pipeline.next_deadline()
  }

  /// Autocomplete the field to `title`. See [`autocomplete::suggest`].
  pub fn suggest(&mut self, title: &str) -> bool {
    autocomplete::suggest(&mut self.state, title)
  }

  /// Autocomplete to `candidate` unless a backward delete happened since the
  /// last key-up.
  pub fn offer_suggestion(&mut self, candidate: &Candidate) -> bool {
    if self.state.suppress_autocomplete() {
      tracing::debug!(title = %candidate.title, "autocomplete suppressed after delete");
      return false;
    }
    self.suggest(&candidate.title)
  }
}
