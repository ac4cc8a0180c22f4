//! Unit-of-work context and logger accessors
//!
//! A [`Context`] travels with a request or call chain and may carry the
//! logger that work should use. Lookups never fail: without an attached
//! logger they fall back to the process-wide default.

use super::attr::Attr;
use super::logger::Logger;
use super::registry::LoggerRegistry;

/// Per-unit-of-work values. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct Context {
    logger: Option<Logger>,
}

impl Context {
    pub fn new() -> Self {
        Self { logger: None }
    }

    /// A child context carrying `logger`; `self` is left untouched
    #[must_use]
    pub fn with_logger(&self, logger: Logger) -> Context {
        Context {
            logger: Some(logger),
        }
    }

    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }
}

/// The logger attached to `ctx`, or the process-wide default
pub fn logger_from_context(ctx: &Context) -> Logger {
    LoggerRegistry::global().from_context(ctx)
}

/// Derive from the context's logger with `attrs` appended left to right.
///
/// The context itself is not modified; attach the result with
/// [`Context::with_logger`] if later lookups should see it.
///
/// ```
/// use rust_logger_fanout::prelude::*;
///
/// let ctx = Context::new().with_logger(Logger::discard());
/// let logger = with_attrs(&ctx, [attr("req_id", "abc"), attr("user", 7)]);
///
/// assert_eq!(logger.attrs().len(), 2);
/// assert!(ctx.logger().unwrap().attrs().is_empty());
/// ```
pub fn with_attrs<I>(ctx: &Context, attrs: I) -> Logger
where
    I: IntoIterator,
    I::Item: Into<Attr>,
{
    with_default_attrs(&logger_from_context(ctx), attrs)
}

/// Derive from an explicit `logger` with `attrs` appended left to right
pub fn with_default_attrs<I>(logger: &Logger, attrs: I) -> Logger
where
    I: IntoIterator,
    I::Item: Into<Attr>,
{
    logger.with_attrs(attrs)
}

/// Snapshot of the process-wide default logger
pub fn default_logger() -> Logger {
    LoggerRegistry::global().get()
}
