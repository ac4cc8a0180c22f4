//! Best-effort fan-out over several appenders
//!
//! Every record goes to every member, in member order. A member that fails or
//! panics never stops the others and never surfaces to the caller; the
//! optional [`ErrorObserver`] is the only place those failures are visible.

use crate::core::{Appender, LoggerError, Record, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Callback receiving the failing member's name and its error
pub type ErrorObserver = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

/// Observer that reports member failures on stderr
pub fn stderr_error_observer() -> ErrorObserver {
    Arc::new(|appender: &str, error: &LoggerError| {
        eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender, error);
    })
}

/// Fan-out appender that ignores member failures (`BestEffortFanout`)
pub struct FanoutAppender {
    members: Vec<Arc<dyn Appender>>,
    on_error: Option<ErrorObserver>,
}

impl FanoutAppender {
    pub fn new(members: Vec<Arc<dyn Appender>>) -> Self {
        Self {
            members,
            on_error: None,
        }
    }

    /// Set a callback for member failures
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_fanout::appenders::{DiscardAppender, FanoutAppender};
    /// use rust_logger_fanout::LoggerError;
    /// use std::sync::Arc;
    ///
    /// let fanout = FanoutAppender::new(vec![Arc::new(DiscardAppender) as _])
    ///     .with_error_observer(Arc::new(|name: &str, err: &LoggerError| {
    ///         eprintln!("{} failed: {}", name, err);
    ///     }));
    /// ```
    #[must_use]
    pub fn with_error_observer(mut self, observer: ErrorObserver) -> Self {
        self.on_error = Some(observer);
        self
    }

    pub fn members(&self) -> &[Arc<dyn Appender>] {
        &self.members
    }

    fn for_each_member<F>(&self, op: F)
    where
        F: Fn(&dyn Appender) -> Result<()>,
    {
        for member in &self.members {
            let outcome = catch_unwind(AssertUnwindSafe(|| op(member.as_ref())));

            let error = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    LoggerError::appender_panicked(member.name(), panic_msg)
                }
            };

            if let Some(observer) = &self.on_error {
                observer(member.name(), &error);
            }
        }
    }
}

impl Appender for FanoutAppender {
    fn append(&self, record: &Record) -> Result<()> {
        self.for_each_member(|member| member.append(record));
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.for_each_member(|member| member.flush());
        Ok(())
    }

    fn name(&self) -> &str {
        "fanout"
    }
}
