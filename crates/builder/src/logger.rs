use std::fmt::Debug;

/// Sink for log messages
pub trait Logger: Debug {
    /// Logs a diagnostic message
    fn debug(&self, message: &str);

    /// Logs a warning
    fn warning(&self, message: &str);
}

/// Logs events to standard error
#[derive(Debug)]
pub struct StdLogger;

impl Logger for StdLogger {
    #[inline]
    fn debug(&self, message: &str) {
        eprintln!("DEBUG: {}", message);
    }

    #[inline]
    fn warning(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }
}

/// Discards all log events
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn debug(&self, _message: &str) {}

    #[inline]
    fn warning(&self, _message: &str) {}
}
