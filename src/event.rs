//! Diagnostics and widget events.
//!
//! Log messages always go to [`tracing`]. A host that has no subscriber
//! installed (a browser shell, an FFI caller) can additionally register a
//! callback to receive them.
//!
//! Named widget events (toolbar actions, completion) belong to one puzzle:
//! each [`crate::Puzzle`] queues its own [`WidgetEvent`]s and the host drains
//! them with [`crate::Puzzle::take_events`].

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use serde::Serialize;

/// Log level for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A named event raised by one puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetEvent {
    /// The reset button was pressed.
    Reset,
    /// The reveal button was pressed.
    Reveal,
    /// The completion overlay became visible.
    Complete,
}

impl WidgetEvent {
    /// Event name as hosts know it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Reveal => "reveal",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for WidgetEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type LogCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Arc::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log message to `tracing` and the registered callback.
///
/// The callback runs after the registry lock is released, so it may log or
/// swap the callback itself.
pub fn emit_log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!(target: "crossword", "{message}"),
        LogLevel::Info => tracing::info!(target: "crossword", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "crossword", "{message}"),
        LogLevel::Error => tracing::error!(target: "crossword", "{message}"),
    }
    let callback = log_callback().lock().ok().and_then(|guard| guard.clone());
    if let Some(callback) = callback {
        callback(level, message);
    }
}
