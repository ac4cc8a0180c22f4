//! Logger construction
//!
//! Turns a [`LoggerConfig`] into a ready [`Logger`]: a stdout appender in the
//! chosen encoding, plus a JSON UDP appender behind a best-effort fan-out
//! when the secondary sink is enabled. Building may install the result as
//! the default logger of a [`LoggerRegistry`].

use super::{
    appender::Appender,
    config::{LoggerConfig, LoggerOption},
    encoding::Encoding,
    error::Result,
    log_level::LogLevel,
    logger::Logger,
    registry::LoggerRegistry,
};
use crate::appenders::{ErrorObserver, FanoutAppender, StreamAppender, UdpAppender};
use std::io::Write;
use std::sync::Arc;

/// Builds loggers and publishes them into a registry
#[derive(Clone)]
pub struct LoggerFactory<'r> {
    registry: &'r LoggerRegistry,
    error_observer: Option<ErrorObserver>,
}

impl LoggerFactory<'static> {
    /// Factory installing into [`LoggerRegistry::global`]
    pub fn global() -> Self {
        Self::with_registry(LoggerRegistry::global())
    }
}

impl<'r> LoggerFactory<'r> {
    pub fn with_registry(registry: &'r LoggerRegistry) -> Self {
        Self {
            registry,
            error_observer: None,
        }
    }

    /// Observe failures of individual fan-out members
    #[must_use]
    pub fn with_error_observer(mut self, observer: ErrorObserver) -> Self {
        self.error_observer = Some(observer);
        self
    }

    pub fn registry(&self) -> &'r LoggerRegistry {
        self.registry
    }

    /// Build a logger writing to standard output
    ///
    /// # Errors
    ///
    /// [`LoggerError::SecondarySinkUnavailable`](super::LoggerError::SecondarySinkUnavailable)
    /// if the secondary sink is enabled and its socket cannot be set up. No
    /// logger is installed in that case.
    pub fn build(&self, config: &LoggerConfig) -> Result<Logger> {
        let primary = StreamAppender::stdout(config.encoding).with_colors(config.colors);
        self.assemble(config, Arc::new(primary))
    }

    /// Build a logger whose primary output is `output` instead of stdout
    pub fn build_with_output<W>(&self, config: &LoggerConfig, output: W) -> Result<Logger>
    where
        W: Write + Send + 'static,
    {
        let primary = StreamAppender::new(output, config.encoding)
            .with_colors(config.colors)
            .with_name("output");
        self.assemble(config, Arc::new(primary))
    }

    fn assemble(&self, config: &LoggerConfig, primary: Arc<dyn Appender>) -> Result<Logger> {
        let appender = if config.secondary_sink.enabled {
            let secondary: Arc<dyn Appender> =
                Arc::new(UdpAppender::connect(&config.secondary_sink.address)?);

            let mut fanout = FanoutAppender::new(vec![primary, secondary]);
            if let Some(observer) = &self.error_observer {
                fanout = fanout.with_error_observer(Arc::clone(observer));
            }
            Arc::new(fanout) as Arc<dyn Appender>
        } else {
            primary
        };

        let logger = Logger::new(appender, config.level).with_source_capture(config.capture_source);

        if config.install_as_default {
            self.registry.set(logger.clone());
        }

        Ok(logger)
    }
}

/// Resolve `options` and build a stdout logger, installing it into the
/// global registry unless told otherwise
///
/// ```
/// use rust_logger_fanout::core::config::{with_level, with_set_default};
/// use rust_logger_fanout::{new_logger, LogLevel};
///
/// let logger = new_logger([with_level("debug"), with_set_default(false)]).unwrap();
/// assert_eq!(logger.min_level(), LogLevel::Debug);
/// ```
pub fn new_logger<I>(options: I) -> Result<Logger>
where
    I: IntoIterator<Item = LoggerOption>,
{
    LoggerFactory::global().build(&LoggerConfig::resolve(options))
}

/// Like [`new_logger`], but a secondary sink that cannot be set up ends the
/// process with exit status 1 after reporting the error on stderr.
pub fn new_logger_or_exit<I>(options: I) -> Logger
where
    I: IntoIterator<Item = LoggerOption>,
{
    match new_logger(options) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("failed to connect to secondary sink: {}", e);
            std::process::exit(1);
        }
    }
}

/// Fluent construction over [`LoggerConfig`] and [`LoggerFactory`]
///
/// # Example
/// ```
/// use rust_logger_fanout::prelude::*;
///
/// let registry = LoggerRegistry::new();
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .encoding(Encoding::Text)
///     .registry(&registry)
///     .output(std::io::sink())
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.min_level(), LogLevel::Warn);
/// assert!(registry.is_set());
/// ```
pub struct LoggerBuilder<'r> {
    config: LoggerConfig,
    factory: LoggerFactory<'r>,
    output: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder<'static> {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            factory: LoggerFactory::global(),
            output: None,
        }
    }
}

impl<'r> LoggerBuilder<'r> {
    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn capture_source(mut self, capture_source: bool) -> Self {
        self.config.capture_source = capture_source;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn install_as_default(mut self, install: bool) -> Self {
        self.config.install_as_default = install;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.config.colors = colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn secondary_sink(mut self, address: impl Into<String>) -> Self {
        self.config = self.config.secondary_sink(true, address);
        self
    }

    /// Apply options on top of what has been set so far
    #[must_use = "builder methods return a new value"]
    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        for option in options {
            option.apply(&mut self.config);
        }
        self
    }

    /// Install into `registry` instead of the global one
    #[must_use = "builder methods return a new value"]
    pub fn registry<'n>(self, registry: &'n LoggerRegistry) -> LoggerBuilder<'n> {
        let mut factory = LoggerFactory::with_registry(registry);
        factory.error_observer = self.factory.error_observer;
        LoggerBuilder {
            config: self.config,
            factory,
            output: self.output,
        }
    }

    /// Write primary output to `output` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_observer(mut self, observer: ErrorObserver) -> Self {
        self.factory = self.factory.with_error_observer(observer);
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        match self.output {
            Some(output) => self.factory.build_with_output(&self.config, output),
            None => self.factory.build(&self.config),
        }
    }
}

impl Default for LoggerBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder<'static> {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{with_json, with_level, with_secondary_sink, with_set_default};
    use crate::core::LoggerError;
    use parking_lot::Mutex;
    use std::io;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn test_build_installs_into_registry() {
        let registry = LoggerRegistry::new();
        let factory = LoggerFactory::with_registry(&registry);

        let logger = factory
            .build_with_output(&LoggerConfig::default(), io::sink())
            .unwrap();

        assert!(registry.get().shares_appender_with(&logger));
    }

    #[test]
    fn test_build_without_install_leaves_registry() {
        let registry = LoggerRegistry::new();
        let installed = Logger::discard();
        registry.set(installed.clone());

        let config = LoggerConfig::resolve([with_set_default(false)]);
        let logger = LoggerFactory::with_registry(&registry)
            .build_with_output(&config, io::sink())
            .unwrap();

        assert!(registry.get().shares_appender_with(&installed));
        assert!(!registry.get().shares_appender_with(&logger));
    }

    #[test]
    fn test_primary_only_without_secondary() {
        let registry = LoggerRegistry::new();
        let logger = LoggerFactory::with_registry(&registry)
            .build_with_output(&LoggerConfig::default(), io::sink())
            .unwrap();
        assert_eq!(logger.appender().name(), "output");
    }

    #[test]
    fn test_text_output_below_threshold() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::default();
        let config = LoggerConfig::resolve([with_level("warn"), with_json(false)]);
        let logger = LoggerFactory::with_registry(&registry)
            .build_with_output(&config, buffer.clone())
            .unwrap();

        logger.info("ignored");
        assert!(buffer.contents().is_empty());

        logger.log_attrs(LogLevel::Warn, "slow request", [("req_id", "abc")]);
        let content = buffer.contents();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("level=WARN"));
        assert!(content.contains("msg=\"slow request\""));
        assert!(content.contains("req_id=abc"));
    }

    #[test]
    fn test_invalid_secondary_address_is_an_error() {
        let registry = LoggerRegistry::new();
        let config = LoggerConfig::resolve([with_secondary_sink(true, "no-port-here")]);

        let result = LoggerFactory::with_registry(&registry).build_with_output(&config, io::sink());

        assert!(matches!(
            result,
            Err(LoggerError::SecondarySinkUnavailable { .. })
        ));
        assert!(!registry.is_set());
    }

    #[test]
    fn test_disabled_secondary_ignores_address() {
        let registry = LoggerRegistry::new();
        let config = LoggerConfig::resolve([with_secondary_sink(false, "no-port-here")]);

        let result = LoggerFactory::with_registry(&registry).build_with_output(&config, io::sink());
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_with_registry_and_output() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::default();

        let logger = Logger::builder()
            .min_level(LogLevel::Debug)
            .encoding(Encoding::Text)
            .capture_source(false)
            .registry(&registry)
            .output(buffer.clone())
            .build()
            .unwrap();

        logger.debug("visible");
        assert!(buffer.contents().contains("level=DEBUG msg=visible"));
        assert!(!buffer.contents().contains("source="));
        assert!(registry.is_set());
    }

    #[test]
    fn test_builder_options_override() {
        let builder = Logger::builder()
            .min_level(LogLevel::Error)
            .options([with_level("info"), with_json(false)]);

        assert_eq!(builder.config().level, LogLevel::Info);
        assert_eq!(builder.config().encoding, Encoding::Text);
    }
}
