//! Format templates with named record fields
//!
//! A template is literal text with `{field}` placeholders. `{{` and `}}`
//! produce literal braces.
//!
//! | field          | value                                   |
//! |----------------|-----------------------------------------|
//! | `timestamp`    | record time, per the [`TimestampFormat`] |
//! | `name`         | logger name                             |
//! | `level`        | `DEBUG` .. `CRITICAL`                   |
//! | `message`      | message text                            |
//! | `thread`       | thread name (or id)                     |
//! | `process`      | process name                            |
//! | `path`         | source file path                        |
//! | `module`       | source file stem                        |
//! | `module_path`  | Rust module path, empty if unknown      |
//! | `function`     | enclosing function                      |
//! | `line`         | source line                             |

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;
use colored::Colorize;
use std::fmt::Write as _;
use std::str::FromStr;

/// Informational channel layout
pub const INFORMATIONAL_TEMPLATE: &str = "\n{timestamp} - {name} - {level}: {message}";

/// Alert channel layout
pub const ALERT_TEMPLATE: &str = "\n-----\n{message} \n{timestamp} - {name} - {level} \n{thread} → {process} \n{path} \n→ {module} → {function} @ {line}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    Name,
    Level,
    Message,
    Thread,
    Process,
    Path,
    Module,
    ModulePath,
    Function,
    Line,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "timestamp" => Ok(Field::Timestamp),
            "name" => Ok(Field::Name),
            "level" => Ok(Field::Level),
            "message" => Ok(Field::Message),
            "thread" => Ok(Field::Thread),
            "process" => Ok(Field::Process),
            "path" => Ok(Field::Path),
            "module" => Ok(Field::Module),
            "module_path" => Ok(Field::ModulePath),
            "function" => Ok(Field::Function),
            "line" => Ok(Field::Line),
            _ => Err(format!("unknown field '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed format template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(LoggerError::formatter(source, "unclosed '{'"));
                            }
                        }
                    }
                    let field = name
                        .trim()
                        .parse::<Field>()
                        .map_err(|message| LoggerError::formatter(source, message))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' => return Err(LoggerError::formatter(source, "unmatched '}'")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn informational() -> Self {
        Self::parse(INFORMATIONAL_TEMPLATE).expect("informational template is valid")
    }

    pub fn alert() -> Self {
        Self::parse(ALERT_TEMPLATE).expect("alert template is valid")
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(*field),
            Segment::Literal(_) => None,
        })
    }

    pub fn render(
        &self,
        record: &LogRecord,
        timestamp_format: &TimestampFormat,
        colorize_level: bool,
    ) -> String {
        let mut out = String::with_capacity(self.source.len() + record.message.len() + 64);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Timestamp) => {
                    out.push_str(&timestamp_format.format(&record.timestamp))
                }
                Segment::Field(Field::Name) => out.push_str(&record.logger),
                Segment::Field(Field::Level) if colorize_level => {
                    let _ = write!(
                        out,
                        "{}",
                        record.level.to_str().color(record.level.color_code())
                    );
                }
                Segment::Field(Field::Level) => out.push_str(record.level.to_str()),
                Segment::Field(Field::Message) => out.push_str(&record.message),
                Segment::Field(Field::Thread) => out.push_str(&record.thread_name),
                Segment::Field(Field::Process) => out.push_str(&record.process_name),
                Segment::Field(Field::Path) => out.push_str(&record.file),
                Segment::Field(Field::Module) => out.push_str(&record.module),
                Segment::Field(Field::ModulePath) => {
                    out.push_str(record.module_path.as_deref().unwrap_or_default())
                }
                Segment::Field(Field::Function) => out.push_str(&record.function),
                Segment::Field(Field::Line) => {
                    let _ = write!(out, "{}", record.line);
                }
            }
        }
        out
    }
}

impl FromStr for Template {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
