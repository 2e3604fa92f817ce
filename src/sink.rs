//! Line sink for user-facing progress output
//!
//! The install and launch pipelines report what they are doing one line at
//! a time. Callers decide where those lines go by passing a [`LogSink`];
//! nothing in the core keeps a sink in global state.

use std::fmt;
use std::sync::Arc;

/// Cloneable, thread-safe receiver of log lines
#[derive(Clone)]
pub struct LogSink {
    inner: Arc<dyn Fn(&str) + Send + Sync>,
}

impl LogSink {
    /// Wrap a closure as a sink
    pub fn new(f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(f) }
    }

    /// Sink that prints each line to stdout
    pub fn stdout() -> Self {
        Self::new(|line| println!("{line}"))
    }

    /// Sink that drops every line
    #[allow(dead_code)]
    pub fn discard() -> Self {
        Self::new(|_| {})
    }

    /// Emit one line
    pub fn line(&self, message: impl AsRef<str>) {
        (self.inner)(message.as_ref());
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink").finish_non_exhaustive()
    }
}

/// Sink that records lines for later inspection
#[cfg(test)]
pub fn collecting() -> (LogSink, Arc<std::sync::Mutex<Vec<String>>>) {
    let lines = Arc::new(std::sync::Mutex::new(Vec::new()));
    let captured = Arc::clone(&lines);
    let sink = LogSink::new(move |line| {
        if let Ok(mut guard) = captured.lock() {
            guard.push(line.to_string());
        }
    });
    (sink, lines)
}
