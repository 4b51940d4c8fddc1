//! File appender implementation

use crate::core::{Appender, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends blocks to a file.
///
/// The file is opened in append mode and created if missing; existing
/// content is never truncated. Writes are unbuffered: each block goes to
/// the file in one `write_all` and is flushed before `append` returns.
pub struct FileAppender {
    file: File,
    path: PathBuf,
}

impl FileAppender {
    /// Open `path` for appending.
    ///
    /// Fails with [`LoggerError::IoOperation`] when the file cannot be
    /// opened, e.g. the directory is missing or not writable.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self { file, path })
    }

    /// Second appender writing through the same open file
    pub fn try_clone(&self) -> Result<Self> {
        let file = self.file.try_clone().map_err(|e| {
            LoggerError::io_operation("sharing log file", self.path.display().to_string(), e)
        })?;

        Ok(Self {
            file,
            path: self.path.clone(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, block: &str) -> Result<()> {
        self.file.write_all(block.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
