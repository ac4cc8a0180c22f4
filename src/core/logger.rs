//! Logger handle

use super::{
    appender::Appender,
    attr::Attr,
    error::Result,
    log_level::LogLevel,
    record::{Record, Source},
};
use crate::appenders::DiscardAppender;
use std::fmt;
use std::sync::Arc;

/// A cheap-to-clone handle over one appender, a level filter and a chain of
/// attributes.
///
/// A `Logger` never changes after construction. [`Logger::with`] and
/// [`Logger::with_attrs`] return new loggers that share the same appender,
/// so attributes added to a derived logger are invisible to the original.
///
/// # Example
///
/// ```
/// use rust_logger_fanout::prelude::*;
///
/// let base = Logger::discard();
/// let request = base.with(attr("req_id", "abc"));
///
/// request.info("handled");
/// assert!(base.attrs().is_empty());
/// assert_eq!(request.attrs().len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    appender: Arc<dyn Appender>,
    min_level: LogLevel,
    capture_source: bool,
    attrs: Arc<[Attr]>,
}

impl Logger {
    #[must_use]
    pub fn new(appender: Arc<dyn Appender>, min_level: LogLevel) -> Self {
        Self {
            appender,
            min_level,
            capture_source: false,
            attrs: Arc::from(Vec::new()),
        }
    }

    /// A logger that drops everything
    #[must_use]
    pub fn discard() -> Self {
        Self::new(Arc::new(DiscardAppender), LogLevel::Info)
    }

    /// Record the call site of every emitted record
    #[must_use]
    pub fn with_source_capture(mut self, capture_source: bool) -> Self {
        self.capture_source = capture_source;
        self
    }

    /// Derive a logger carrying one more attribute
    #[must_use]
    pub fn with(&self, attr: impl Into<Attr>) -> Logger {
        self.with_attrs([attr.into()])
    }

    /// Derive a logger carrying `attrs` after the existing ones, in order
    #[must_use]
    pub fn with_attrs<I>(&self, attrs: I) -> Logger
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        let chain: Vec<Attr> = self
            .attrs
            .iter()
            .cloned()
            .chain(attrs.into_iter().map(Into::into))
            .collect();

        Logger {
            appender: Arc::clone(&self.appender),
            min_level: self.min_level,
            capture_source: self.capture_source,
            attrs: Arc::from(chain),
        }
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn captures_source(&self) -> bool {
        self.capture_source
    }

    pub fn appender(&self) -> &Arc<dyn Appender> {
        &self.appender
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Whether both loggers write to the same appender
    pub fn shares_appender_with(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.appender, &other.appender)
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_attrs(level, message, std::iter::empty::<Attr>());
    }

    /// Log with per-record attributes, emitted after the logger's own
    #[track_caller]
    pub fn log_attrs<I>(&self, level: LogLevel, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        if !self.enabled(level) {
            return;
        }

        let mut record = Record::new(level, message);
        if self.capture_source {
            record = record.with_source(Source::caller());
        }
        record.attrs.extend(self.attrs.iter().cloned());
        record.attrs.extend(attrs.into_iter().map(Into::into));

        // Write failures are not surfaced to the call site.
        let _ = self.appender.append(&record);
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.flush()
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::discard()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("appender", &self.appender.name())
            .field("min_level", &self.min_level)
            .field("capture_source", &self.capture_source)
            .field("attrs", &self.attrs)
            .finish()
    }
}
