//! Stream appender: encodes records onto any `Write` (stdout by default)

use crate::core::{Appender, Encoding, Record, RecordEncoder, Result};
use parking_lot::Mutex;
use std::io::{self, Write};

pub struct StreamAppender<W: Write + Send> {
    writer: Mutex<W>,
    encoder: RecordEncoder,
    name: String,
}

impl StreamAppender<io::Stdout> {
    /// Appender bound to the process's standard output
    pub fn stdout(encoding: Encoding) -> Self {
        Self::new(io::stdout(), encoding).with_name("stdout")
    }
}

impl<W: Write + Send> StreamAppender<W> {
    pub fn new(writer: W, encoding: Encoding) -> Self {
        Self {
            writer: Mutex::new(writer),
            encoder: RecordEncoder::new(encoding),
            name: "stream".to_string(),
        }
    }

    /// Colorize levels in text output
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_fanout::appenders::StreamAppender;
    /// use rust_logger_fanout::Encoding;
    ///
    /// let appender = StreamAppender::stdout(Encoding::Text).with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.encoder = self.encoder.clone().with_colors(use_colors);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn encoding(&self) -> Encoding {
        self.encoder.encoding()
    }
}

impl<W: Write + Send> Appender for StreamAppender<W> {
    fn append(&self, record: &Record) -> Result<()> {
        let mut line = Vec::with_capacity(256);
        self.encoder.encode(record, &mut line)?;

        // One write per record so concurrent loggers never interleave lines.
        self.writer.lock().write_all(&line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<W: Write + Send> Drop for StreamAppender<W> {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}
