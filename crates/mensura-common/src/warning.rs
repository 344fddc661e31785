//! Engine warnings with colored terminal output.
//!
//! Measurement calls are pure and must never fail because of a style value
//! the engine does not understand, so unsupported input is reported here
//! instead. Each unique message prints once per process to keep repeated
//! snapshot rebuilds from flooding the terminal.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Messages already printed, for deduplication.
static REPORTED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about unsupported style input (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Style", "unknown property 'aspect-ratio'");
/// ```
///
/// # Panics
/// Panics if the deduplication set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = REPORTED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        eprintln!(
            "{}",
            format!("[Mensura {component}] ⚠ {message}").yellow()
        );
    }
}

/// Forget all recorded warnings (call when loading a fresh snapshot).
///
/// # Panics
/// Panics if the deduplication set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = REPORTED.lock().unwrap();
    if let Some(reported) = guard.as_mut() {
        reported.clear();
    }
}
