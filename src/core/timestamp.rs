//! Timestamp formatting utilities
//!
//! Both channels stamp records with local wall-clock time and its UTC
//! offset. Other layouts are available for embedders that want them.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// strftime layout of [`TimestampFormat::LocalWithOffset`]
pub const LOCAL_WITH_OFFSET: &str = "%Y-%m-%d %H:%M:%S %z";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use channel_logger::core::TimestampFormat;
/// use chrono::{FixedOffset, TimeZone};
///
/// let cst = FixedOffset::west_opt(6 * 3600).unwrap();
/// let at = cst.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(TimestampFormat::default().format(&at), "2024-03-09 14:05:07 -0600");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2024-03-09 14:05:07 -0600`
    #[default]
    LocalWithOffset,

    /// RFC 3339: `2024-03-09T14:05:07-06:00`
    Rfc3339,

    /// ISO 8601 with milliseconds: `2024-03-09T14:05:07.123-06:00`
    Iso8601,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime according to this format.
    ///
    /// A custom layout chrono cannot render falls back to
    /// [`LOCAL_WITH_OFFSET`] rather than failing the log call.
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::LocalWithOffset => datetime.format(LOCAL_WITH_OFFSET).to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return datetime.format(LOCAL_WITH_OFFSET).to_string();
                }
                out
            }
        }
    }

    /// Reject custom layouts containing unknown strftime specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime layout '{}'", format_str),
                ));
            }
        }
        Ok(())
    }
}
