//! Log entry type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single structured log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 timestamp (e.g., "2026-01-21T14:30:45.123Z")
    pub ts: String,

    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Page name the entry belongs to
    pub page: String,

    /// Module path / target (e.g., "fundpage_core::progress")
    pub target: String,

    pub msg: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

impl LogEntry {
    pub fn new(
        level: impl Into<String>,
        page: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            page: page.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    /// One-line console rendering: `[page] target: msg {fields}`.
    pub fn console_line(&self) -> String {
        match &self.fields {
            Some(fields) => format!("[{}] {}: {} {}", self.page, self.target, self.msg, fields),
            None => format!("[{}] {}: {}", self.page, self.target, self.msg),
        }
    }

    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
