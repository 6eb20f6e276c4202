//! Structured logging for the page.
//!
//! Events from `tracing` are turned into [`LogEntry`] values by
//! [`ConsoleLayer`] and handed to a [`LogSink`]. In the browser the sink
//! writes to the developer console; tests collect entries in memory.
//!
//! ## Usage
//!
//! ```ignore
//! use fundpage_core::logging::{ConsoleLayer, LogSink};
//! use tracing_subscriber::prelude::*;
//!
//! let layer = ConsoleLayer::new("fundraiser", my_sink);
//! tracing_subscriber::registry()
//!     .with(layer.with_filter(tracing_subscriber::filter::LevelFilter::INFO))
//!     .init();
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogEntry;
pub use layer::{ConsoleLayer, LogSink, MemorySink};
