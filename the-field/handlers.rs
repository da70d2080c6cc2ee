//! Waking the UI context when the search field has due work, for hosts
//! running a tokio runtime.
//!
//! The pipeline itself stays on the UI context. After handling an event the
//! host reports [`SearchField::next_deadline`](crate::SearchField::next_deadline)
//! to a [`PumpHook`]; once that deadline passes without being replaced, the
//! hook sends a [`Wake`] and the host calls `pump`.

use the_search_event::AsyncHook;
use tokio::{
  sync::mpsc::{
    Sender,
    error::TrySendError,
  },
  time::Instant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpEvent {
  /// Replace the pending deadline. `None` clears it.
  Reschedule(Option<std::time::Instant>),
}

pub struct PumpHook {
  wake_tx: Sender<Wake>,
}

impl PumpHook {
  pub fn new(wake_tx: Sender<Wake>) -> Self {
    Self { wake_tx }
  }
}

impl AsyncHook for PumpHook {
  type Event = PumpEvent;

  fn handle_event(&mut self, event: Self::Event, _timeout: Option<Instant>) -> Option<Instant> {
    match event {
      PumpEvent::Reschedule(deadline) => deadline.map(Instant::from_std),
    }
  }

  fn finish_debounce(&mut self) {
    self.wake();
  }
}

impl PumpHook {
  /// Queue a wake for the host. Returns whether one is pending afterwards.
  fn wake(&self) -> bool {
    match self.wake_tx.try_send(Wake) {
      // a wake is already queued, one is enough
      Ok(()) | Err(TrySendError::Full(_)) => true,
      Err(TrySendError::Closed(_)) => {
        tracing::warn!("search field wake channel closed");
        false
      },
    }
  }
}
