//! Log record structure

use super::attr::Attr;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// Call-site position of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Source {
    pub fn from_location(location: &Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Position of the caller, following `#[track_caller]` frames
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub source: Option<Source>,
    pub attrs: Vec<Attr>,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            source: None,
            attrs: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_attr(mut self, attr: impl Into<Attr>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn with_attrs<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        self.attrs.extend(attrs.into_iter().map(Into::into));
        self
    }
}
