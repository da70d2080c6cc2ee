//! Restartable cancellation for background work.

use std::sync::{
  Arc,
  atomic::{
    AtomicBool,
    Ordering,
  },
};

/// Observes whether the task it was handed out for has been cancelled.
#[derive(Debug, Clone)]
pub struct TaskHandle {
  cancelled:  Arc<AtomicBool>,
  generation: u64,
}

impl TaskHandle {
  pub fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Acquire)
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }
}

/// Owns the "current" task. Restarting cancels whatever ran before, so at
/// most one handle is live at a time.
#[derive(Debug, Default)]
pub struct TaskController {
  current:    Option<TaskHandle>,
  generation: u64,
}

impl TaskController {
  pub fn new() -> Self {
    Self::default()
  }

  /// Cancel the running task, if any, and hand out a handle for a new one.
  pub fn restart(&mut self) -> TaskHandle {
    self.cancel();
    self.generation = self.generation.wrapping_add(1);
    let handle = TaskHandle {
      cancelled:  Arc::new(AtomicBool::new(false)),
      generation: self.generation,
    };
    self.current = Some(handle.clone());
    handle
  }

  /// Returns whether a live task was cancelled.
  pub fn cancel(&mut self) -> bool {
    match self.current.take() {
      Some(handle) => !handle.cancelled.swap(true, Ordering::AcqRel),
      None => false,
    }
  }

  pub fn is_running(&self) -> bool {
    self
      .current
      .as_ref()
      .is_some_and(|handle| !handle.is_cancelled())
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }
}

impl Drop for TaskController {
  fn drop(&mut self) {
    self.cancel();
  }
}

#[cfg(test)]
mod test {
  use super::TaskController;

  #[test]
  fn restart_cancels_previous_handle() {
    let mut controller = TaskController::new();
    let first = controller.restart();
    let second = controller.restart();
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
    assert_eq!(second.generation(), 2);
    assert!(controller.is_running());
  }

  #[test]
  fn cancel_reports_live_task_only() {
    let mut controller = TaskController::new();
    assert!(!controller.cancel());
    let handle = controller.restart();
    assert!(controller.cancel());
    assert!(handle.is_cancelled());
    assert!(!controller.cancel());
    assert!(!controller.is_running());
  }

  #[test]
  fn dropping_controller_cancels() {
    let handle = {
      let mut controller = TaskController::new();
      controller.restart()
    };
    assert!(handle.is_cancelled());
  }
}
