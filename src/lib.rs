//! # Rust Logger Fanout
//!
//! Builds a structured logger from a handful of options and optionally
//! duplicates its output to a UDP collector.
//!
//! ## Features
//!
//! - **Two encodings**: JSON lines (default) or `key=value` text on stdout
//! - **Secondary sink**: every record also sent as a JSON datagram, through a
//!   best-effort fan-out that never lets one destination block another
//! - **Default logger**: a replaceable process-wide logger, with a registry
//!   type for code that prefers to pass it explicitly
//! - **Context accessors**: fetch the logger for a unit of work and derive
//!   loggers with extra attributes without touching the original
//!
//! ```
//! use rust_logger_fanout::prelude::*;
//! use rust_logger_fanout::core::config::{with_json, with_level, with_set_default};
//!
//! let logger = new_logger([with_level("warn"), with_json(false), with_set_default(false)])?;
//! logger.info("below the threshold, dropped");
//! logger.log_attrs(LogLevel::Warn, "slow request", [attr("req_id", "abc")]);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{FanoutAppender, StreamAppender, UdpAppender};
    pub use crate::core::{
        attr, default_logger, logger_from_context, new_logger, new_logger_or_exit, with_attrs,
        with_default_attrs, Appender, Attr, Context, Encoding, FieldValue, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerFactory, LoggerOption, LoggerRegistry,
        Record, Result, SecondarySinkConfig,
    };
}

pub use appenders::{FanoutAppender, StreamAppender, UdpAppender};
pub use crate::core::{
    attr, default_logger, logger_from_context, new_logger, new_logger_or_exit, with_attrs,
    with_default_attrs, Appender, Attr, Context, Encoding, FieldValue, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerFactory, LoggerOption, LoggerRegistry, Record,
    Result, SecondarySinkConfig,
};
