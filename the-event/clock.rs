use std::{
  sync::Arc,
  time::{
    Duration,
    Instant,
  },
};

use parking_lot::Mutex;

/// Source of "now" for debounce and settle deadlines.
///
/// Production hosts use [`SystemClock`]; tests drive a [`ManualClock`] so no
/// test ever sleeps.
pub trait Clock {
  fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> Instant {
    Instant::now()
  }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
  now: Arc<Mutex<Instant>>,
}

impl ManualClock {
  pub fn new() -> Self {
    Self::starting_at(Instant::now())
  }

  pub fn starting_at(start: Instant) -> Self {
    Self {
      now: Arc::new(Mutex::new(start)),
    }
  }

  pub fn advance(&self, by: Duration) -> Instant {
    let mut now = self.now.lock();
    *now += by;
    *now
  }

  pub fn advance_ms(&self, ms: u64) -> Instant {
    self.advance(Duration::from_millis(ms))
  }
}

impl Default for ManualClock {
  fn default() -> Self {
    Self::new()
  }
}

impl Clock for ManualClock {
  fn now(&self) -> Instant {
    *self.now.lock()
  }
}

impl<C: Clock + ?Sized> Clock for &C {
  fn now(&self) -> Instant {
    (**self).now()
  }
}
