//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::OnceLock;

/// Function name used when the call site did not supply one.
pub const UNKNOWN_FUNCTION: &str = "(unknown function)";

// Thread-local cache for the thread label to avoid repeated allocations
thread_local! {
    static THREAD_NAME_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

static PROCESS_NAME: OnceLock<String> = OnceLock::new();

/// Name of the current thread, or its id when the thread is unnamed
fn current_thread_name() -> String {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let thread = std::thread::current();
                match thread.name() {
                    Some(name) => name.to_string(),
                    None => format!("{:?}", thread.id()),
                }
            })
            .clone()
    })
}

/// Executable stem of this process, falling back to its pid
fn current_process_name() -> &'static str {
    PROCESS_NAME.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| format!("process-{}", std::process::id()))
    })
}

fn module_from_path(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

/// A single logging event.
///
/// Messages are kept verbatim, including embedded newlines: the alert
/// channel renders multi-paragraph messages as written.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub logger: String,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub thread_name: String,
    pub process_name: String,
    pub file: String,
    pub line: u32,
    /// File stem of `file`
    pub module: String,
    pub module_path: Option<String>,
    pub function: String,
    /// Captured error text: the error, its causes and a backtrace when enabled
    pub error: Option<String>,
}

impl LogRecord {
    pub fn new(logger: impl Into<String>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
            level,
            message: message.into(),
            timestamp: Local::now(),
            thread_name: current_thread_name(),
            process_name: current_process_name().to_string(),
            file: String::new(),
            line: 0,
            module: String::new(),
            module_path: None,
            function: UNKNOWN_FUNCTION.to_string(),
            error: None,
        }
    }

    pub fn with_location(
        mut self,
        file: &str,
        line: u32,
        module_path: Option<&str>,
        function: Option<&str>,
    ) -> Self {
        self.module = module_from_path(file);
        self.file = file.to_string();
        self.line = line;
        self.module_path = module_path.map(str::to_string);
        if let Some(function) = function {
            self.function = function.to_string();
        }
        self
    }

    /// Attach an error, its `source()` chain and a backtrace of the logging
    /// call site.
    ///
    /// The backtrace is captured whatever `RUST_BACKTRACE` says.
    pub fn with_error(mut self, error: &(dyn Error + 'static)) -> Self {
        self.error = Some(describe_error(error, &Backtrace::force_capture()));
        self
    }

    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error = Some(text.into());
        self
    }
}

fn describe_error(error: &(dyn Error + 'static), backtrace: &Backtrace) -> String {
    let mut text = format!("Error: {}", error);

    let mut causes = std::iter::successors(error.source(), |&e| e.source()).peekable();
    if causes.peek().is_some() {
        text.push_str("\n\nCaused by:");
        for (idx, cause) in causes.enumerate() {
            let _ = write!(text, "\n    {}: {}", idx, cause);
        }
    }

    if backtrace.status() == BacktraceStatus::Captured {
        let _ = write!(text, "\n\nStack backtrace:\n{}", backtrace);
    }

    text
}
