//! Record formatter: template plus timestamp layout

use super::log_record::LogRecord;
use super::template::Template;
use super::timestamp::TimestampFormat;

/// Renders records into text blocks for a handler
#[derive(Debug, Clone)]
pub struct Formatter {
    template: Template,
    timestamp_format: TimestampFormat,
    colors: bool,
}

impl Formatter {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            timestamp_format: TimestampFormat::default(),
            colors: false,
        }
    }

    /// Compact single-line layout of the informational channel
    pub fn informational() -> Self {
        Self::new(Template::informational())
    }

    /// Verbose multi-line layout of the alert channel
    pub fn alert() -> Self {
        Self::new(Template::alert())
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Color the level name with ANSI escapes
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Render a record; captured error text follows on its own line
    pub fn format(&self, record: &LogRecord) -> String {
        let mut block = self
            .template
            .render(record, &self.timestamp_format, self.colors);
        if let Some(ref error) = record.error {
            block.push('\n');
            block.push_str(error);
        }
        block
    }
}
