//! Page logger: tracing events to the developer console.

use fundpage_core::logging::{ConsoleLayer, LogEntry, LogSink};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Sink writing entries with the console method matching their level.
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    fn write(&self, level: Level, entry: &LogEntry) {
        let line = entry.console_line();
        if level == Level::ERROR {
            gloo::console::error!(line);
        } else if level == Level::WARN {
            gloo::console::warn!(line);
        } else if level == Level::INFO {
            gloo::console::log!(line);
        } else {
            gloo::console::debug!(line);
        }
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(level: Level) {
    let layer = ConsoleLayer::new("fundraiser", BrowserConsole)
        .with_filter(LevelFilter::from_level(level));
    let _ = tracing_subscriber::registry().with(layer).try_init();
}
