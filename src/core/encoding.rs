//! Record encodings
//!
//! Renders a [`Record`] as one newline-terminated line:
//! - Json: one JSON object per line, for log shippers and aggregation tools
//! - Text: `key=value` pairs, readable by humans and still machine-parseable

use super::attr::{Attr, FieldValue};
use super::error::Result;
use super::record::{Record, Source};
use chrono::SecondsFormat;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Output encoding for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Structured JSON lines (default)
    ///
    /// Example: `{"time":"2025-01-08T10:30:45.123Z","level":"INFO","msg":"Request processed"}`
    #[default]
    Json,

    /// Human-readable key=value text
    ///
    /// Example: `time=2025-01-08T10:30:45.123Z level=INFO msg="Request processed"`
    Text,
}

impl Encoding {
    pub fn from_json_flag(is_json: bool) -> Self {
        if is_json {
            Encoding::Json
        } else {
            Encoding::Text
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Encoding::Json)
    }
}

/// Turns records into bytes for one encoding
#[derive(Debug, Clone, Default)]
pub struct RecordEncoder {
    encoding: Encoding,
    use_colors: bool,
}

impl RecordEncoder {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            use_colors: false,
        }
    }

    /// Colorize the level in text output. Ignored for JSON.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Append the encoded record, including the trailing newline, to `buf`
    pub fn encode(&self, record: &Record, buf: &mut Vec<u8>) -> Result<()> {
        match self.encoding {
            Encoding::Json => self.encode_json(record, buf)?,
            Encoding::Text => self.encode_text(record, buf),
        }
        buf.push(b'\n');
        Ok(())
    }

    /// Encode into a fresh string without the trailing newline
    pub fn encode_to_string(&self, record: &Record) -> Result<String> {
        let mut buf = Vec::with_capacity(256);
        self.encode(record, &mut buf)?;
        buf.pop();
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn encode_json(&self, record: &Record, buf: &mut Vec<u8>) -> Result<()> {
        // Written by hand rather than through a map so duplicate keys survive in order.
        buf.push(b'{');
        write_json_field(buf, true, "time", &format_time(record))?;
        write_json_field(buf, false, "level", record.level.to_str())?;
        if let Some(source) = &record.source {
            write_json_field(buf, false, "source", &source_json(source))?;
        }
        write_json_field(buf, false, "msg", &record.message)?;
        for Attr { key, value } in &record.attrs {
            write_json_field(buf, false, key, &value.to_json_value())?;
        }
        buf.push(b'}');
        Ok(())
    }

    fn encode_text(&self, record: &Record, buf: &mut Vec<u8>) {
        let level = if self.use_colors {
            record
                .level
                .to_str()
                .color(record.level.color_code())
                .to_string()
        } else {
            record.level.to_str().to_string()
        };

        let mut parts = vec![
            format!("time={}", format_time(record)),
            format!("level={}", level),
        ];
        if let Some(source) = &record.source {
            parts.push(format!(
                "source={}",
                escape_text_value(&format!("{}:{}", source.file, source.line))
            ));
        }
        parts.push(format!("msg={}", escape_text_value(&record.message)));

        for Attr { key, value } in &record.attrs {
            let formatted_value = match value {
                FieldValue::String(s) => escape_text_value(s),
                other => other.to_string(),
            };
            parts.push(format!("{}={}", escape_text_value(key), formatted_value));
        }

        buf.extend_from_slice(parts.join(" ").as_bytes());
    }
}

fn format_time(record: &Record) -> String {
    record.time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn source_json(source: &Source) -> serde_json::Value {
    serde_json::json!({
        "file": source.file,
        "line": source.line,
        "column": source.column,
    })
}

fn write_json_field<V>(buf: &mut Vec<u8>, first: bool, key: &str, value: &V) -> Result<()>
where
    V: Serialize + ?Sized,
{
    if !first {
        buf.push(b',');
    }
    serde_json::to_writer(&mut *buf, key)?;
    buf.push(b':');
    serde_json::to_writer(&mut *buf, value)?;
    Ok(())
}

/// Quote a text value if it would otherwise be ambiguous
fn escape_text_value(value: &str) -> String {
    if needs_quoting(value) {
        quote_text_value(value)
    } else {
        value.to_string()
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '"' || c == '=')
}

fn quote_text_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{{{:04x}}}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
