//! Debounced event handlers running on a tokio task.
//!
//! Hosts with a tokio runtime can move debouncing off the UI context: the UI
//! sends events into an [`AsyncHook`] and the hook decides when the burst is
//! over. Hosts without a runtime use [`crate::DebounceQueue`] directly.

use std::time::Duration;

use futures_executor::block_on;
use tokio::{
  sync::mpsc::{
    self,
    Sender,
    error::TrySendError,
  },
  time::Instant,
};

/// Upper bound on how long the UI context may block on a full channel.
const MAX_SEND_BLOCK: Duration = Duration::from_millis(2);

const CHANNEL_CAPACITY: usize = 128;

pub trait AsyncHook: Send + 'static + Sized {
  type Event: Send + 'static;

  /// Called for every received event. Returns the deadline at which
  /// [`AsyncHook::finish_debounce`] runs, or `None` to have no deadline
  /// pending. `timeout` is the currently pending deadline.
  fn handle_event(&mut self, event: Self::Event, timeout: Option<Instant>) -> Option<Instant>;

  /// Called once the pending deadline passes without a newer event
  /// replacing it.
  fn finish_debounce(&mut self);

  /// Start the hook on the current tokio runtime.
  ///
  /// Outside a runtime the receiver is dropped, and sends fail quietly, so
  /// unit tests that never start a runtime can still construct hooks.
  fn spawn(self) -> Sender<Self::Event> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    if tokio::runtime::Handle::try_current().is_ok() {
      tokio::spawn(run(self, rx));
    }
    tx
  }
}

async fn run<Hook: AsyncHook>(mut hook: Hook, mut rx: mpsc::Receiver<Hook::Event>) {
  let mut deadline = None;
  loop {
    let event = match deadline {
      Some(at) => match tokio::time::timeout_at(at, rx.recv()).await {
        Ok(event) => event,
        Err(_) => {
          hook.finish_debounce();
          deadline = None;
          continue;
        },
      },
      None => rx.recv().await,
    };
    let Some(event) = event else {
      break;
    };
    deadline = hook.handle_event(event, deadline);

    // Fold whatever queued up meanwhile so a burst only moves the deadline
    // once per wakeup.
    let mut coalesced = 0usize;
    while let Ok(event) = rx.try_recv() {
      deadline = hook.handle_event(event, deadline);
      coalesced += 1;
    }
    if coalesced > 0 {
      log::trace!("async hook coalesced {coalesced} queued events");
    }
  }
  log::debug!("async hook channel closed, stopping");
}

/// Send from synchronous code, blocking at most [`MAX_SEND_BLOCK`] when the
/// channel is full. The event is dropped if the channel stays full.
pub fn send_blocking<T>(tx: &Sender<T>, data: T) {
  match tx.try_send(data) {
    Ok(()) => {},
    Err(TrySendError::Full(data)) => {
      if block_on(tx.send_timeout(data, MAX_SEND_BLOCK)).is_err() {
        log::warn!("dropping event: hook channel stayed full");
      }
    },
    Err(TrySendError::Closed(_)) => {
      log::warn!("attempted to send to a closed hook channel");
    },
  }
}

/// Send without blocking. Returns whether the event was queued.
pub fn try_send<T>(tx: &Sender<T>, data: T) -> bool {
  tx.try_send(data).is_ok()
}

#[cfg(test)]
mod test {
  use std::sync::Arc;

  use parking_lot::Mutex;

  use super::*;

  struct Collect {
    pending: Option<u32>,
    fired:   Arc<Mutex<Vec<u32>>>,
  }

  impl AsyncHook for Collect {
    type Event = u32;

    fn handle_event(&mut self, event: u32, _timeout: Option<Instant>) -> Option<Instant> {
      self.pending = Some(event);
      Some(Instant::now() + Duration::from_millis(50))
    }

    fn finish_debounce(&mut self) {
      if let Some(event) = self.pending.take() {
        self.fired.lock().push(event);
      }
    }
  }

  #[tokio::test(start_paused = true)]
  async fn burst_fires_last_event_once() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let tx = Collect {
      pending: None,
      fired:   fired.clone(),
    }
    .spawn();

    for event in 1..=3 {
      send_blocking(&tx, event);
      tokio::time::sleep(Duration::from_millis(10)).await;
    }
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(*fired.lock(), vec![3]);
  }

  #[tokio::test(start_paused = true)]
  async fn queued_burst_is_folded_into_one_deadline() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let tx = Collect {
      pending: None,
      fired:   fired.clone(),
    }
    .spawn();

    // Nothing runs the hook task until the first await, so all three
    // events sit in the channel together.
    for event in 1..=3 {
      send_blocking(&tx, event);
    }
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(*fired.lock(), vec![3]);
  }

  #[test]
  fn spawn_outside_runtime_drops_events() {
    let tx = Collect {
      pending: None,
      fired:   Arc::new(Mutex::new(Vec::new())),
    }
    .spawn();
    assert!(!try_send(&tx, 1));
  }
}
