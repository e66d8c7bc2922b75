//! Process-wide log and event hooks.
//!
//! Hosts without a `tracing` subscriber can still observe the widget by
//! installing callbacks here. Every log message is also emitted through
//! `tracing` under the `textinput` target.

use std::sync::Mutex;

/// Name of the event emitted with the new value after every committed change.
pub const VALUE_CHANGED: &str = "value_changed";

/// Severity of a log message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Per-edit detail: rejected candidates, clamped scrollbar values.
    Debug,
    /// Informational message.
    Info,
    /// Recoverable problem.
    Warn,
    /// Unrecoverable problem.
    Error,
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

static EVENT_HOOK: Mutex<Option<EventCallback>> = Mutex::new(None);
static LOG_HOOK: Mutex<Option<LogCallback>> = Mutex::new(None);

// A poisoned slot is left as is; hooks are best effort.
fn store<T: ?Sized>(slot: &Mutex<Option<Box<T>>>, hook: Option<Box<T>>) {
    if let Ok(mut guard) = slot.lock() {
        *guard = hook;
    }
}

/// Install the event hook, replacing any previous one.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    store(&EVENT_HOOK, Some(Box::new(callback) as EventCallback));
}

pub fn clear_event_callback() {
    store(&EVENT_HOOK, None);
}

/// Send a named event with its payload to the hook, if any.
pub fn emit_event(name: &str, data: &str) {
    if let Ok(guard) = EVENT_HOOK.lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Install the log hook, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    store(&LOG_HOOK, Some(Box::new(callback) as LogCallback));
}

pub fn clear_log_callback() {
    store(&LOG_HOOK, None);
}

/// Log through `tracing` and the log hook.
pub fn emit_log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!(target: "textinput", "{message}"),
        LogLevel::Info => tracing::info!(target: "textinput", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "textinput", "{message}"),
        LogLevel::Error => tracing::error!(target: "textinput", "{message}"),
    }
    if let Ok(guard) = LOG_HOOK.lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}
