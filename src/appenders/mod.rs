//! Appender implementations

pub mod file;
pub mod memory;
pub mod stream;

pub use file::FileAppender;
pub use memory::SharedBuffer;
pub use stream::StreamAppender;

pub use crate::core::Appender;
