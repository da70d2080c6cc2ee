//! A last-write-wins operation queue.
//!
//! Each [`DebounceQueue::schedule`] cancels everything queued before it, so
//! no matter how many operations a burst of input schedules, only the last
//! one is ever handed back by [`DebounceQueue::take_due`].

use std::time::{
  Duration,
  Instant,
};

use crate::cancel::{
  TaskController,
  TaskHandle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationId(pub u64);

#[derive(Debug)]
struct Operation<W> {
  id:     OperationId,
  due_at: Instant,
  handle: TaskHandle,
  work:   W,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueStats {
  pub scheduled: u64,
  pub cancelled: u64,
  pub executed:  u64,
}

#[derive(Debug)]
pub struct DebounceQueue<W> {
  controller: TaskController,
  pending:    Option<Operation<W>>,
  stats:      QueueStats,
}

impl<W> Default for DebounceQueue<W> {
  fn default() -> Self {
    Self {
      controller: TaskController::new(),
      pending:    None,
      stats:      QueueStats::default(),
    }
  }
}

impl<W> DebounceQueue<W> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Queue `work` to become due `delay` after `now`, cancelling every
  /// operation queued before it.
  pub fn schedule(&mut self, work: W, now: Instant, delay: Duration) -> OperationId {
    self.cancel_all();
    let handle = self.controller.restart();
    let id = OperationId(handle.generation());
    self.pending = Some(Operation {
      id,
      due_at: now + delay,
      handle,
      work,
    });
    self.stats.scheduled += 1;
    log::trace!("debounce: scheduled operation {} in {:?}", id.0, delay);
    id
  }

  /// Drop all queued work. Returns the number of operations cancelled.
  pub fn cancel_all(&mut self) -> usize {
    self.controller.cancel();
    match self.pending.take() {
      Some(op) => {
        self.stats.cancelled += 1;
        log::trace!("debounce: cancelled operation {}", op.id.0);
        1
      },
      None => 0,
    }
  }

  /// Take the queued operation if its deadline has passed.
  pub fn take_due(&mut self, now: Instant) -> Option<(OperationId, W)> {
    let op = self.pending.as_ref()?;
    if op.due_at > now {
      return None;
    }
    let op = self.pending.take()?;
    if op.handle.is_cancelled() {
      return None;
    }
    self.stats.executed += 1;
    Some((op.id, op.work))
  }

  pub fn next_deadline(&self) -> Option<Instant> {
    self.pending.as_ref().map(|op| op.due_at)
  }

  /// Cancellation handle of the queued operation.
  pub fn pending_handle(&self) -> Option<&TaskHandle> {
    self.pending.as_ref().map(|op| &op.handle)
  }

  pub fn pending_id(&self) -> Option<OperationId> {
    self.pending.as_ref().map(|op| op.id)
  }

  pub fn is_idle(&self) -> bool {
    self.pending.is_none()
  }

  pub fn stats(&self) -> QueueStats {
    self.stats
  }
}
