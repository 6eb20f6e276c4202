//! Browser timers.

use fundpage_core::schedule::{Scheduler, Task};
use gloo::timers::callback::Timeout;

/// `Scheduler` backed by `setTimeout`. Timeouts are forgotten once set.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}
