//! Custom tracing Layer that forwards events to a [`LogSink`].

use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::entry::LogEntry;

/// Destination for formatted log entries.
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, level: Level, entry: &LogEntry);
}

/// Sink that keeps entries in memory.
#[derive(Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn write(&self, _level: Level, entry: &LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}

/// A tracing Layer that turns events into [`LogEntry`] values.
pub struct ConsoleLayer<K: LogSink> {
    page: String,
    sink: K,
}

impl<K: LogSink> ConsoleLayer<K> {
    /// # Arguments
    /// * `page` - Name shown in every entry (e.g., "fundraiser")
    /// * `sink` - Where entries go
    pub fn new(page: impl Into<String>, sink: K) -> Self {
        Self {
            page: page.into(),
            sink,
        }
    }

    pub fn page(&self) -> &str {
        &self.page
    }
}

impl<S, K> Layer<S> for ConsoleLayer<K>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    K: LogSink,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = *metadata.level();

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        let mut entry = LogEntry::new(
            level.as_str().to_lowercase(),
            &self.page,
            metadata.target(),
            message,
        );
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        self.sink.write(level, &entry);
    }
}

/// Collects the message and any extra fields of one event.
///
/// Page events carry string-like fields only; numbers and bools reach
/// `record_debug` through the default `Visit` methods and are kept as text.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldVisitor {
    fn put(&mut self, field: &Field, text: String) {
        match field.name() {
            "message" => self.message = Some(text),
            name => {
                self.fields.insert(name.to_string(), serde_json::Value::String(text));
            }
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::prelude::*;

    #[test]
    fn test_console_layer_captures_events() {
        let sink = MemorySink::new();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new("test", sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Page initialized");
            tracing::warn!(step = "toast", "Region missing");
        });

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "Page initialized");
        assert_eq!(entries[0].level, "info");
        assert_eq!(entries[0].page, "test");
        assert_eq!(entries[1].level, "warn");
        let fields = entries[1].fields.as_ref().unwrap();
        assert_eq!(fields["step"], "toast");
    }

    #[test]
    fn test_numeric_fields_kept_as_text() {
        let sink = MemorySink::new();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new("test", sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(ready = 4, "Page ready");
        });

        let entries = sink.entries();
        assert_eq!(entries[0].msg, "Page ready");
        assert_eq!(entries[0].fields.as_ref().unwrap()["ready"], "4");
    }

    #[test]
    fn test_level_filter_applies() {
        let sink = MemorySink::new();
        let layer = ConsoleLayer::new("test", sink.clone())
            .with_filter(tracing_subscriber::filter::LevelFilter::WARN);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::error!("shown");
        });

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].msg, "shown");
    }
}
