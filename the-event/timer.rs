use std::time::{
  Duration,
  Instant,
};

/// A single-shot timer. Arming replaces any deadline already set, so at most
/// one firing is ever pending.
#[derive(Debug, Default, Clone)]
pub struct SettleTimer {
  deadline: Option<Instant>,
}

impl SettleTimer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Arm the timer. Returns whether an armed deadline was replaced.
  pub fn arm(&mut self, now: Instant, delay: Duration) -> bool {
    let replaced = self.deadline.replace(now + delay).is_some();
    if replaced {
      log::trace!("settle timer re-armed");
    }
    replaced
  }

  /// Returns whether the timer was armed.
  pub fn disarm(&mut self) -> bool {
    self.deadline.take().is_some()
  }

  /// Fire the timer if its deadline has passed. Fires at most once per arm.
  pub fn poll(&mut self, now: Instant) -> bool {
    match self.deadline {
      Some(deadline) if deadline <= now => {
        self.deadline = None;
        true
      },
      _ => false,
    }
  }

  pub fn deadline(&self) -> Option<Instant> {
    self.deadline
  }

  pub fn is_armed(&self) -> bool {
    self.deadline.is_some()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn fires_once_after_deadline() {
    let start = Instant::now();
    let mut timer = SettleTimer::new();
    assert!(!timer.arm(start, Duration::from_secs(1)));
    assert!(!timer.poll(start + Duration::from_millis(999)));
    assert!(timer.poll(start + Duration::from_secs(1)));
    assert!(!timer.poll(start + Duration::from_secs(2)));
    assert!(!timer.is_armed());
  }

  #[test]
  fn rearming_pushes_deadline_back() {
    let start = Instant::now();
    let mut timer = SettleTimer::new();
    timer.arm(start, Duration::from_secs(1));
    assert!(timer.arm(start + Duration::from_millis(800), Duration::from_secs(1)));
    assert!(!timer.poll(start + Duration::from_secs(1)));
    assert!(timer.poll(start + Duration::from_millis(1800)));
  }

  #[test]
  fn disarm_prevents_firing() {
    let start = Instant::now();
    let mut timer = SettleTimer::new();
    timer.arm(start, Duration::ZERO);
    assert!(timer.disarm());
    assert!(!timer.poll(start));
  }
}
