//! Core logger types and traits

pub mod appender;
pub mod attr;
pub mod config;
pub mod context;
pub mod encoding;
pub mod error;
pub mod factory;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod registry;

pub use appender::Appender;
pub use attr::{attr, Attr, FieldValue};
pub use config::{LoggerConfig, LoggerOption, SecondarySinkConfig};
pub use context::{default_logger, logger_from_context, with_attrs, with_default_attrs, Context};
pub use encoding::{Encoding, RecordEncoder};
pub use error::{LoggerError, Result};
pub use factory::{new_logger, new_logger_or_exit, LoggerBuilder, LoggerFactory};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use record::{Record, Source};
pub use registry::LoggerRegistry;
