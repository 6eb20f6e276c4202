//! Timer capability.
//!
//! Page timers (progress fill delay, toast auto-hide) are fire-and-forget:
//! once scheduled they always run. The browser binding backs `Scheduler` with
//! `gloo` timeouts; `ManualScheduler` is a virtual clock for tests and the CLI.

use std::cell::{Cell, RefCell};

/// Deferred task run by a scheduler
pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay. Scheduled tasks cannot be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

/// Virtual-clock scheduler.
///
/// Nothing runs until [`ManualScheduler::advance`] moves the clock. Tasks
/// with the same due time run in the order they were scheduled.
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Number of tasks that have not run yet.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Advance the clock, running every task that falls due on the way.
    ///
    /// Tasks may schedule further tasks; those run too if they fall due
    /// before the new time.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.now_ms.get() + delta_ms;
        while let Some(entry) = self.pop_due(target) {
            self.now_ms.set(entry.due_ms);
            (entry.task)();
        }
        self.now_ms.set(target);
    }

    /// Run everything that is pending, however far in the future.
    pub fn run_all(&self) {
        let last_due = self
            .pending
            .borrow()
            .iter()
            .map(|p| p.due_ms)
            .max();
        if let Some(due) = last_due {
            self.advance(due.saturating_sub(self.now_ms.get()));
        }
    }

    fn pop_due(&self, target: u64) -> Option<Pending> {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= target)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        Some(pending.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push(Pending {
            due_ms: self.now_ms.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}
