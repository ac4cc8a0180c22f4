//! Logger configuration and option resolution
//!
//! A [`LoggerConfig`] starts from fixed defaults and is refined by an ordered
//! list of [`LoggerOption`]s. Resolution never fails: a level name that does
//! not parse degrades to `Info` instead of rejecting the configuration, and
//! the secondary sink address is only checked when the logger is built.

use super::encoding::Encoding;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;
pub const DEFAULT_ENCODING: Encoding = Encoding::Json;
pub const DEFAULT_CAPTURE_SOURCE: bool = true;
pub const DEFAULT_INSTALL_AS_DEFAULT: bool = true;
pub const DEFAULT_SECONDARY_SINK_ENABLED: bool = false;

/// Optional network sink receiving a JSON copy of every record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondarySinkConfig {
    pub enabled: bool,
    /// `host:port` of the UDP collector
    pub address: String,
}

impl SecondarySinkConfig {
    pub fn new(enabled: bool, address: impl Into<String>) -> Self {
        Self {
            enabled,
            address: address.into(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(DEFAULT_SECONDARY_SINK_ENABLED, String::new())
    }
}

/// Fully resolved logger configuration
///
/// Deserializable with every field optional, so it can be embedded in a host
/// application's own config file:
///
/// ```
/// use rust_logger_fanout::{Encoding, LogLevel, LoggerConfig};
///
/// let config: LoggerConfig =
///     serde_json::from_str(r#"{"level": "Warn", "encoding": "text"}"#).unwrap();
///
/// assert_eq!(config.level, LogLevel::Warn);
/// assert_eq!(config.encoding, Encoding::Text);
/// assert!(config.capture_source);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub encoding: Encoding,
    pub capture_source: bool,
    pub install_as_default: bool,
    /// Colorize levels in text output
    pub colors: bool,
    pub secondary_sink: SecondarySinkConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            encoding: DEFAULT_ENCODING,
            capture_source: DEFAULT_CAPTURE_SOURCE,
            install_as_default: DEFAULT_INSTALL_AS_DEFAULT,
            colors: false,
            secondary_sink: SecondarySinkConfig::disabled(),
        }
    }
}

impl LoggerConfig {
    /// Apply `options` in order over the defaults; later options win
    ///
    /// ```
    /// use rust_logger_fanout::core::config::{with_json, with_level};
    /// use rust_logger_fanout::{Encoding, LogLevel, LoggerConfig};
    ///
    /// let config = LoggerConfig::resolve([with_level("warn"), with_json(false)]);
    /// assert_eq!(config.level, LogLevel::Warn);
    /// assert_eq!(config.encoding, Encoding::Text);
    /// ```
    pub fn resolve<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn capture_source(mut self, capture_source: bool) -> Self {
        self.capture_source = capture_source;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn install_as_default(mut self, install_as_default: bool) -> Self {
        self.install_as_default = install_as_default;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn secondary_sink(mut self, enabled: bool, address: impl Into<String>) -> Self {
        self.secondary_sink = SecondarySinkConfig::new(enabled, address);
        self
    }
}

/// One configuration step; each variant sets exactly one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerOption {
    Level(LogLevel),
    Encoding(Encoding),
    Source(bool),
    SetDefault(bool),
    Colors(bool),
    SecondarySink(SecondarySinkConfig),
}

impl LoggerOption {
    pub fn apply(&self, config: &mut LoggerConfig) {
        match self {
            LoggerOption::Level(level) => config.level = *level,
            LoggerOption::Encoding(encoding) => config.encoding = *encoding,
            LoggerOption::Source(capture) => config.capture_source = *capture,
            LoggerOption::SetDefault(install) => config.install_as_default = *install,
            LoggerOption::Colors(colors) => config.colors = *colors,
            LoggerOption::SecondarySink(sink) => config.secondary_sink = sink.clone(),
        }
    }
}

/// Minimum level by name, case-insensitive; unknown names mean `Info`
pub fn with_level(level: &str) -> LoggerOption {
    LoggerOption::Level(LogLevel::parse_lenient(level))
}

/// JSON output when `true`, text otherwise
pub fn with_json(is_json: bool) -> LoggerOption {
    LoggerOption::Encoding(Encoding::from_json_flag(is_json))
}

pub fn with_encoding(encoding: Encoding) -> LoggerOption {
    LoggerOption::Encoding(encoding)
}

/// Include the call site in every record
pub fn with_source(capture_source: bool) -> LoggerOption {
    LoggerOption::Source(capture_source)
}

/// Install the built logger as the process-wide default
pub fn with_set_default(install: bool) -> LoggerOption {
    LoggerOption::SetDefault(install)
}

pub fn with_colors(colors: bool) -> LoggerOption {
    LoggerOption::Colors(colors)
}

/// Duplicate every record as JSON to a UDP collector at `address`
pub fn with_secondary_sink(enabled: bool, address: impl Into<String>) -> LoggerOption {
    LoggerOption::SecondarySink(SecondarySinkConfig::new(enabled, address))
}
