//! Appender that drops every record

use crate::core::{Appender, Record, Result};

/// Backs the default logger before one has been installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardAppender;

impl Appender for DiscardAppender {
    fn append(&self, _record: &Record) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
