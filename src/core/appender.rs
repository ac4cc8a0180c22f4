//! Appender trait for log output destinations

use super::{error::Result, record::Record};

/// A destination for encoded records.
///
/// Appenders are shared between a logger and every logger derived from it,
/// so they take `&self` and synchronize internally where needed.
pub trait Appender: Send + Sync {
    fn append(&self, record: &Record) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
