//! Scheduling primitives: clocks, cancellation, a last-write-wins debounce
//! queue, a single-shot settle timer, and tokio-backed async hooks.

mod cancel;
mod clock;
mod hook;
mod queue;
mod timer;

pub use cancel::{
  TaskController,
  TaskHandle,
};
pub use clock::{
  Clock,
  ManualClock,
  SystemClock,
};
pub use hook::{
  AsyncHook,
  send_blocking,
  try_send,
};
pub use queue::{
  DebounceQueue,
  OperationId,
  QueueStats,
};
pub use timer::SettleTimer;
