//! Donation progress display
//!
//! Computes the percentage of the goal reached and renders it into three
//! regions: the "Raised: $X of $Y" line, the percentage label, and the fill
//! bar whose width grows after a short delay.
//!
//! ## Percentage rules
//!
//! - `percentage = min(raised / goal * 100, 100)`; the clamp is for display
//!   only and `raised` itself is never clamped
//! - `goal == 0`: 100% if anything was raised, otherwise 0%
//!
//! ## Example
//!
//! ```
//! use fundpage_core::progress::Progress;
//! use fundpage_core::format::CurrencyFormatter;
//!
//! let snapshot = Progress::new(20_000.0, 5_000.0).snapshot(&CurrencyFormatter::default());
//! assert_eq!(snapshot.raised_text, "Raised: $5,000 of $20,000");
//! assert_eq!(snapshot.percentage_text, "25.0%");
//! ```

use std::rc::Rc;

use crate::error::{PageError, PageResult};
use crate::format::{format_fill_width, format_percentage, CurrencyFormatter};
use crate::schedule::Scheduler;

/// Goal and raised amount at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub goal: f64,
    pub raised: f64,
}

impl Progress {
    pub fn new(goal: f64, raised: f64) -> Self {
        Self { goal, raised }
    }

    /// Clamped percentage in `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        if self.goal <= 0.0 {
            return if self.raised > 0.0 { 100.0 } else { 0.0 };
        }
        (self.raised * 100.0 / self.goal).clamp(0.0, 100.0)
    }

    /// Whether the displayed percentage has reached 100.
    pub fn is_funded(&self) -> bool {
        self.percentage() >= 100.0
    }

    /// Texts the page shows for this progress.
    pub fn snapshot(&self, formatter: &CurrencyFormatter) -> ProgressSnapshot {
        let percentage = self.percentage();
        ProgressSnapshot {
            raised_text: format!(
                "Raised: {} of {}",
                formatter.format(self.raised),
                formatter.format(self.goal)
            ),
            percentage_text: format_percentage(percentage),
            fill_width: format_fill_width(percentage),
        }
    }
}

/// Rendered output of the progress display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub raised_text: String,
    pub percentage_text: String,
    /// CSS width applied to the fill bar
    pub fill_width: String,
}

/// The three regions the progress display writes to.
pub trait ProgressSurface {
    fn set_raised_text(&self, text: &str);
    fn set_percentage_text(&self, text: &str);
    fn set_fill_width(&self, width: &str);
}

/// Stateful controller behind the external "update raised amount" call
pub struct DonationProgress {
    goal: f64,
    raised: f64,
    fill_delay_ms: u32,
    formatter: CurrencyFormatter,
}

impl DonationProgress {
    pub fn new(goal: f64, raised: f64, fill_delay_ms: u32, formatter: CurrencyFormatter) -> Self {
        Self {
            goal,
            raised,
            fill_delay_ms,
            formatter,
        }
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    /// Raised amount as stored, never clamped to the goal.
    pub fn raised(&self) -> f64 {
        self.raised
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.goal, self.raised)
    }

    /// Render into `surface`.
    ///
    /// Texts are written immediately; the fill width is applied after the
    /// configured delay. Returns `MissingRegion` without touching anything
    /// when the surface is absent.
    pub fn render(
        &self,
        surface: Option<Rc<dyn ProgressSurface>>,
        scheduler: &dyn Scheduler,
    ) -> PageResult<ProgressSnapshot> {
        let surface = surface
            .ok_or_else(|| PageError::MissingRegion("progress display".to_string()))?;
        let snapshot = self.progress().snapshot(&self.formatter);

        surface.set_raised_text(&snapshot.raised_text);
        surface.set_percentage_text(&snapshot.percentage_text);

        let width = snapshot.fill_width.clone();
        scheduler.schedule(
            self.fill_delay_ms,
            Box::new(move || surface.set_fill_width(&width)),
        );

        tracing::debug!(
            raised = self.raised,
            goal = self.goal,
            percentage = %snapshot.percentage_text,
            "Rendered donation progress"
        );
        Ok(snapshot)
    }

    /// Store a new raised amount and re-render.
    ///
    /// Negative or non-finite amounts are rejected and leave the stored value
    /// unchanged.
    pub fn update_raised(
        &mut self,
        amount: f64,
        surface: Option<Rc<dyn ProgressSurface>>,
        scheduler: &dyn Scheduler,
    ) -> PageResult<ProgressSnapshot> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(PageError::InvalidAmount(amount));
        }
        self.raised = amount;
        let snapshot = self.render(surface, scheduler)?;
        tracing::info!("Raised amount updated to: ${}", amount);
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSurface {
        raised: RefCell<String>,
        percentage: RefCell<String>,
        width: RefCell<String>,
    }

    impl ProgressSurface for RecordingSurface {
        fn set_raised_text(&self, text: &str) {
            *self.raised.borrow_mut() = text.to_string();
        }
        fn set_percentage_text(&self, text: &str) {
            *self.percentage.borrow_mut() = text.to_string();
        }
        fn set_fill_width(&self, width: &str) {
            *self.width.borrow_mut() = width.to_string();
        }
    }

    fn controller(raised: f64) -> DonationProgress {
        DonationProgress::new(20_000.0, raised, 300, CurrencyFormatter::default())
    }

    #[test]
    fn test_percentage_basic() {
        assert_eq!(Progress::new(20_000.0, 0.0).percentage(), 0.0);
        assert_eq!(Progress::new(20_000.0, 5_000.0).percentage(), 25.0);
        assert_eq!(Progress::new(20_000.0, 25_000.0).percentage(), 100.0);
    }

    #[test]
    fn test_zero_goal_policy() {
        assert_eq!(Progress::new(0.0, 0.0).percentage(), 0.0);
        assert_eq!(Progress::new(0.0, 10.0).percentage(), 100.0);
    }

    #[test]
    fn test_zero_goal_funded_only_with_donations() {
        assert!(!Progress::new(0.0, 0.0).is_funded());
        assert!(Progress::new(0.0, 10.0).is_funded());
        assert!(!Progress::new(20_000.0, 19_999.0).is_funded());
        assert!(Progress::new(20_000.0, 20_000.0).is_funded());
    }

    #[test]
    fn test_snapshot_label_rounds_ties_up() {
        let fmt = CurrencyFormatter::default();
        assert_eq!(Progress::new(20_000.0, 2_450.0).snapshot(&fmt).percentage_text, "12.3%");
        assert_eq!(Progress::new(400.0, 1.0).snapshot(&fmt).percentage_text, "0.3%");
        assert_eq!(Progress::new(8_000.0, 20.0).snapshot(&fmt).percentage_text, "0.3%");
    }

    #[test]
    fn test_snapshot_for_empty_fund() {
        let snapshot = Progress::new(20_000.0, 0.0).snapshot(&CurrencyFormatter::default());
        assert_eq!(snapshot.raised_text, "Raised: $0 of $20,000");
        assert_eq!(snapshot.percentage_text, "0.0%");
        assert_eq!(snapshot.fill_width, "0%");
    }

    #[test]
    fn test_render_delays_fill() {
        let scheduler = ManualScheduler::new();
        let surface = Rc::new(RecordingSurface::default());
        controller(5_000.0)
            .render(Some(surface.clone()), &scheduler)
            .unwrap();

        assert_eq!(*surface.raised.borrow(), "Raised: $5,000 of $20,000");
        assert_eq!(*surface.percentage.borrow(), "25.0%");
        assert_eq!(*surface.width.borrow(), "");

        scheduler.advance(300);
        assert_eq!(*surface.width.borrow(), "25%");
    }

    #[test]
    fn test_render_missing_region() {
        let scheduler = ManualScheduler::new();
        let result = controller(5_000.0).render(None, &scheduler);
        assert!(matches!(result, Err(PageError::MissingRegion(_))));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_update_keeps_unclamped_amount() {
        let scheduler = ManualScheduler::new();
        let surface = Rc::new(RecordingSurface::default());
        let mut progress = controller(0.0);
        let snapshot = progress
            .update_raised(25_000.0, Some(surface.clone()), &scheduler)
            .unwrap();
        assert_eq!(snapshot.percentage_text, "100.0%");
        assert_eq!(progress.raised(), 25_000.0);
        assert!(progress.progress().is_funded());
    }

    #[test]
    fn test_update_rejects_invalid_amounts() {
        let scheduler = ManualScheduler::new();
        let mut progress = controller(100.0);
        assert!(matches!(
            progress.update_raised(-1.0, None, &scheduler),
            Err(PageError::InvalidAmount(_))
        ));
        assert!(progress.update_raised(f64::NAN, None, &scheduler).is_err());
        assert_eq!(progress.raised(), 100.0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let surface = Rc::new(RecordingSurface::default());
        let progress = controller(1_234.0);
        let first = progress.render(Some(surface.clone()), &scheduler).unwrap();
        scheduler.run_all();
        let width_after_first = surface.width.borrow().clone();
        let second = progress.render(Some(surface.clone()), &scheduler).unwrap();
        scheduler.run_all();
        assert_eq!(first, second);
        assert_eq!(*surface.width.borrow(), width_after_first);
    }
}
