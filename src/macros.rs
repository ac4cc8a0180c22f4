//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Attributes for a
//! single record follow a `;` as `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use rust_logger_fanout::prelude::*;
//! use rust_logger_fanout::{info, warn};
//!
//! let logger = Logger::discard();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With per-record attributes
//! warn!(logger, "Slow request took {}ms", 950; "req_id" => "abc", "route" => "/users");
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_logger_fanout::prelude::*;
/// # let logger = Logger::discard();
/// use rust_logger_fanout::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Warn, "Retrying"; "attempt" => 2);
///
/// // Named and inline format arguments work alongside attributes
/// let host = "db-1";
/// log!(logger, LogLevel::Error, "{host} down for {secs}s", secs = 30; "retry" => true);
/// ```
#[macro_export]
macro_rules! log {
    // Collect format tokens until a top-level `;` starts the attributes.
    (@collect $logger:expr, $level:expr, [$($fmt:tt)*] ; $($key:expr => $value:expr),+ $(,)?) => {
        $logger.log_attrs(
            $level,
            format!($($fmt)*),
            [$($crate::Attr::new($key, $value)),+],
        )
    };
    (@collect $logger:expr, $level:expr, [$($fmt:tt)*] $next:tt $($rest:tt)*) => {
        $crate::log!(@collect $logger, $level, [$($fmt)* $next] $($rest)*)
    };
    (@collect $logger:expr, $level:expr, [$($fmt:tt)*]) => {
        $logger.log($level, format!($($fmt)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!(@collect $logger, $level, [] $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_fanout::prelude::*;
/// # let logger = Logger::discard();
/// use rust_logger_fanout::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_fanout::prelude::*;
/// # let logger = Logger::discard();
/// use rust_logger_fanout::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100; "batch" => 7);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_fanout::prelude::*;
/// # let logger = Logger::discard();
/// use rust_logger_fanout::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_fanout::prelude::*;
/// # let logger = Logger::discard();
/// use rust_logger_fanout::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Appender, LogLevel, Logger, Record, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct CapturingAppender {
        records: Mutex<Vec<Record>>,
    }

    impl Appender for CapturingAppender {
        fn append(&self, record: &Record) -> Result<()> {
            self.records.lock().push(record.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "capturing"
        }
    }

    fn capturing_logger() -> (Logger, Arc<CapturingAppender>) {
        let appender = Arc::new(CapturingAppender::default());
        let logger = Logger::new(appender.clone(), LogLevel::Debug).with_source_capture(true);
        (logger, appender)
    }

    #[test]
    fn test_log_macro() {
        let (logger, appender) = capturing_logger();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let records = appender.records.lock();
        assert_eq!(records[0].message, "Test message");
        assert_eq!(records[1].message, "Formatted: 42");
    }

    #[test]
    fn test_level_macros() {
        let (logger, appender) = capturing_logger();
        debug!(logger, "Debug message");
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        let levels: Vec<LogLevel> = appender.records.lock().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error]
        );
    }

    #[test]
    fn test_macro_attributes() {
        let (logger, appender) = capturing_logger();
        info!(logger, "Request {} done", 7; "req_id" => "abc", "status" => 200);
        warn!(logger, "Plain"; "k" => true,);

        let records = appender.records.lock();
        assert_eq!(records[0].message, "Request 7 done");
        assert_eq!(records[0].attrs.len(), 2);
        assert_eq!(records[0].attrs[0].key, "req_id");
        assert_eq!(records[1].attrs[0].key, "k");
    }

    #[test]
    fn test_macro_named_args_with_attributes() {
        let (logger, appender) = capturing_logger();
        let user = "ana";
        info!(logger, "{user} paid {amount}", amount = 12; "currency" => "EUR");
        error!(logger, "{}: {code}", "upstream", code = 502; "retry" => false, "hop" => 2,);

        let records = appender.records.lock();
        assert_eq!(records[0].message, "ana paid 12");
        assert_eq!(records[0].attrs.len(), 1);
        assert_eq!(records[0].attrs[0].key, "currency");
        assert_eq!(records[1].message, "upstream: 502");
        assert_eq!(records[1].attrs.len(), 2);
        assert_eq!(records[1].attrs[1].key, "hop");
    }

    #[test]
    fn test_macro_without_attributes_keeps_block_semicolons() {
        let (logger, appender) = capturing_logger();
        warn!(logger, "value {}", { let x = 2; x * 3 });

        let records = appender.records.lock();
        assert_eq!(records[0].message, "value 6");
        assert!(records[0].attrs.is_empty());
    }

    #[test]
    fn test_macro_captures_call_site() {
        let (logger, appender) = capturing_logger();
        info!(logger, "where am I");

        let records = appender.records.lock();
        let source = records[0].source.expect("source captured");
        assert!(source.file.ends_with("macros.rs"));
    }
}
