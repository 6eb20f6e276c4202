//! Fundraising Page Core Library
//!
//! The rules behind a single fundraising page, independent of any browser.
//!
//! ## Overview
//!
//! The page shows donation progress, copies the wallet address to the
//! clipboard, scrolls smoothly to in-page anchors, runs a single-selection
//! FAQ accordion and fades sections in as they scroll into view. Every
//! platform interaction (DOM regions, clipboard, timers, scrolling) is a
//! narrow trait, so the rules here are tested without a rendering engine.
//!
//! ## Components
//!
//! - [`progress`]: percentage, currency text, delayed fill bar
//! - [`clipboard`]: async clipboard write with a temporary-input fallback
//! - [`notify`]: last-write-wins toast with alert fallback
//! - [`scroll`]: anchor scroll planning with navbar offset
//! - [`accordion`]: at most one FAQ item open
//! - [`reveal`]: one-shot fade-in on intersection
//!
//! ## Quick Start
//!
//! ```
//! use fundpage_core::{DonationProgress, FundraiserConfig, CurrencyFormatter};
//! use fundpage_core::schedule::ManualScheduler;
//!
//! let config = FundraiserConfig::default();
//! let mut progress = DonationProgress::new(
//!     config.goal,
//!     config.raised,
//!     config.fill_delay_ms,
//!     CurrencyFormatter::new(&config.currency_symbol),
//! );
//!
//! // No regions on this "page": the update is stored but rendering is skipped
//! let scheduler = ManualScheduler::new();
//! assert!(progress.update_raised(5_000.0, None, &scheduler).is_err());
//! assert_eq!(progress.raised(), 5_000.0);
//! assert_eq!(progress.progress().percentage(), 25.0);
//! ```

pub mod accordion;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod notify;
pub mod page;
pub mod progress;
pub mod reveal;
pub mod schedule;
pub mod scroll;

// Re-exports
pub use accordion::{Accordion, PanelState};
pub use clipboard::{copy_address, ClipboardWriter, CopyOutcome, CopyPath, TemporaryInputHost};
pub use config::{FundraiserConfig, PageRegions};
pub use error::{PageError, PageResult};
pub use format::CurrencyFormatter;
pub use notify::{AlertFallback, Notifier, Severity, ToastSurface};
pub use page::{init_isolated, InitReport, StepStatus};
pub use progress::{DonationProgress, Progress, ProgressSnapshot, ProgressSurface};
pub use reveal::{IntersectionOptions, IntersectionSample, RevealOutcome, RevealTracker, Visibility};
pub use schedule::{ManualScheduler, Scheduler};
pub use scroll::{AnchorAction, ScrollViewport};
