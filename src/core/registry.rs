//! Owner of the default logger
//!
//! A registry holds at most one logger. Reading an empty registry yields a
//! discard logger, so callers always get something usable. Installing
//! replaces the previous logger; concurrent installs resolve as last write
//! wins.

use super::context::Context;
use super::logger::Logger;
use parking_lot::RwLock;

static GLOBAL_REGISTRY: LoggerRegistry = LoggerRegistry::new();

#[derive(Debug)]
pub struct LoggerRegistry {
    current: RwLock<Option<Logger>>,
}

impl LoggerRegistry {
    pub const fn new() -> Self {
        Self {
            current: parking_lot::const_rwlock(None),
        }
    }

    /// The process-wide registry used by [`default_logger`](super::context::default_logger)
    pub fn global() -> &'static LoggerRegistry {
        &GLOBAL_REGISTRY
    }

    /// Snapshot of the installed logger, or a discard logger if none is set
    pub fn get(&self) -> Logger {
        self.current.read().clone().unwrap_or_else(Logger::discard)
    }

    /// Install `logger`, returning the one it replaces
    pub fn set(&self, logger: Logger) -> Option<Logger> {
        self.current.write().replace(logger)
    }

    /// Remove the installed logger
    pub fn clear(&self) -> Option<Logger> {
        self.current.write().take()
    }

    pub fn is_set(&self) -> bool {
        self.current.read().is_some()
    }

    /// The logger attached to `ctx`, else this registry's logger
    pub fn from_context(&self, ctx: &Context) -> Logger {
        match ctx.logger() {
            Some(logger) => logger.clone(),
            None => self.get(),
        }
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
