//! Toast notifications
//!
//! One toast surface per page. A new message replaces whatever is showing
//! and restarts the visibility window (last write wins, no queue). Hide
//! timers are never cancelled; each show bumps a generation counter and a
//! hide timer only acts if its generation is still current.

use std::cell::Cell;
use std::rc::Rc;

use crate::schedule::Scheduler;

pub const COPY_SUCCESS_MESSAGE: &str = "✓ Wallet address copied!";
pub const COPY_FAILURE_MESSAGE: &str = "❌ Failed to copy. Please copy manually.";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    /// Toast background colour
    pub fn background(&self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }
}

/// The toast container and its message region.
pub trait ToastSurface {
    fn show(&self, message: &str, severity: Severity);
    fn hide(&self);
}

/// Blocking fallback used when the page has no toast surface.
pub trait AlertFallback {
    fn alert(&self, message: &str);
}

pub struct Notifier {
    surface: Option<Rc<dyn ToastSurface>>,
    alert: Rc<dyn AlertFallback>,
    scheduler: Rc<dyn Scheduler>,
    duration_ms: u32,
    generation: Rc<Cell<u64>>,
}

impl Notifier {
    pub fn new(
        surface: Option<Rc<dyn ToastSurface>>,
        alert: Rc<dyn AlertFallback>,
        scheduler: Rc<dyn Scheduler>,
        duration_ms: u32,
    ) -> Self {
        Self {
            surface,
            alert,
            scheduler,
            duration_ms,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn success(&self, message: &str) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: &str) {
        self.notify(message, Severity::Error);
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        let Some(surface) = self.surface.clone() else {
            tracing::warn!("Toast elements not found");
            self.alert.alert(message);
            return;
        };

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        surface.show(message, severity);

        let current = self.generation.clone();
        self.scheduler.schedule(
            self.duration_ms,
            Box::new(move || {
                if current.get() == generation {
                    surface.hide();
                }
            }),
        );
    }
}
