//! Record filters evaluated by handlers after the level threshold

use super::log_level::LogLevel;
use super::log_record::LogRecord;

/// Per-record accept/reject predicate.
///
/// Any `Fn(&LogRecord) -> bool` closure is a filter.
pub trait Filter: Send + Sync {
    fn accept(&self, record: &LogRecord) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&LogRecord) -> bool + Send + Sync,
{
    fn accept(&self, record: &LogRecord) -> bool {
        self(record)
    }
}

/// Accepts records at or below a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLevel(pub LogLevel);

impl Filter for MaxLevel {
    fn accept(&self, record: &LogRecord) -> bool {
        record.level <= self.0
    }
}

/// Accepts records at or above a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLevel(pub LogLevel);

impl Filter for MinLevel {
    fn accept(&self, record: &LogRecord) -> bool {
        record.level >= self.0
    }
}
