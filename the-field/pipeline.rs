//! Turns text changes into debounced table queries.
//!
//! Every text change raises `search_in_progress`, drops whatever query was
//! still queued and queues a query for the new text. The host drives the
//! pipeline from its UI context with [`QueryPipeline::poll`], so queued work
//! never runs on the stack of the key handler that scheduled it.

use std::time::{
  Duration,
  Instant,
};

use the_search_event::{
  DebounceQueue,
  OperationId,
  QueueStats,
  SettleTimer,
};

use crate::context::SearchContext;

/// How long `search_in_progress` stays raised after a query completes when
/// the editor takes focus on note selection.
pub const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Handed to the backend with each query and returned when it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCompletion {
  pub id:    OperationId,
  pub query: String,
}

#[derive(Debug)]
struct PendingQuery {
  query: String,
}

/// What a single [`QueryPipeline::poll`] did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PollResult {
  pub issued:  Option<QueryCompletion>,
  pub settled: bool,
}

#[derive(Debug, Default)]
pub struct QueryPipeline {
  queue:       DebounceQueue<PendingQuery>,
  settle:      SettleTimer,
  last_issued: Option<OperationId>,
}

impl QueryPipeline {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn text_did_change(&mut self, ctx: &mut SearchContext, text: &str, now: Instant) -> OperationId {
    ctx.search_in_progress = true;
    let cancelled = self.queue.cancel_all();
    let id = self.queue.schedule(
      PendingQuery {
        query: text.to_string(),
      },
      now,
      ctx.config.debounce(),
    );
    tracing::debug!(
      query = text,
      operation = id.0,
      cancelled,
      "search text changed"
    );
    id
  }

  /// Fire the settle timer and take the queued query if they are due.
  pub fn poll(&mut self, ctx: &mut SearchContext, now: Instant) -> PollResult {
    let mut result = PollResult::default();

    if self.settle.poll(now) {
      ctx.search_in_progress = false;
      result.settled = true;
      tracing::debug!("search settled");
    }

    if let Some((id, pending)) = self.queue.take_due(now) {
      self.last_issued = Some(id);
      result.issued = Some(QueryCompletion {
        id,
        query: pending.query,
      });
    }

    result
  }

  /// Record that the backend finished a query.
  ///
  /// Completions of superseded queries are processed like any other.
  pub fn complete(&mut self, ctx: &mut SearchContext, completion: &QueryCompletion, now: Instant) {
    if self.last_issued != Some(completion.id) {
      tracing::debug!(
        operation = completion.id.0,
        "superseded query completed"
      );
    }

    if ctx.config.focus_editor_on_note_selection {
      self.settle.arm(now, SETTLE_DELAY);
    } else {
      ctx.search_in_progress = false;
    }
  }

  /// Earliest instant at which [`QueryPipeline::poll`] has work to do.
  pub fn next_deadline(&self) -> Option<Instant> {
    match (self.queue.next_deadline(), self.settle.deadline()) {
      (Some(query), Some(settle)) => Some(query.min(settle)),
      (query, settle) => query.or(settle),
    }
  }

  pub fn has_pending_query(&self) -> bool {
    !self.queue.is_idle()
  }

  pub fn is_settling(&self) -> bool {
    self.settle.is_armed()
  }

  pub fn stats(&self) -> QueueStats {
    self.queue.stats()
  }
}
