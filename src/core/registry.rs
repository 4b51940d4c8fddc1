//! Name-keyed logger registry
//!
//! Requesting the same name twice yields the same `Arc<Logger>`. The
//! registry is an ordinary value: create one per application, or per test
//! for isolation, and use [`global`] only for the process-wide convenience
//! entry points.

use super::error::Result;
use super::logger::Logger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the logger registered under `name`, creating it if needed
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name))),
        )
    }

    /// Look up a logger without creating it
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Flush every registered logger, stopping at the first failure
    pub fn flush_all(&self) -> Result<()> {
        for logger in self.loggers.read().values() {
            logger.flush()?;
        }
        Ok(())
    }

    /// Flush and detach every logger's handlers, then forget all loggers.
    ///
    /// Handles held elsewhere stay valid but no longer write anywhere.
    pub fn shutdown(&self) -> Result<()> {
        let loggers: Vec<Arc<Logger>> = self.loggers.write().drain().map(|(_, l)| l).collect();

        let mut first_error = None;
        for logger in loggers {
            if let Err(e) = logger.flush() {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush '{}' during shutdown: {}",
                    logger.name(),
                    e
                );
                first_error.get_or_insert(e);
            }
            logger.clear_handlers();
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Forget every logger without flushing or detaching handlers
    pub fn reset(&self) {
        self.loggers.write().clear();
    }
}

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// Process-wide registry used by [`setup`](crate::config::setup) and the
/// `channel-demo` binary
pub fn global() -> &'static LoggerRegistry {
    GLOBAL.get_or_init(LoggerRegistry::new)
}
