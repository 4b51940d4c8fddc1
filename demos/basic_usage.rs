//! Basic channel logger usage example
//!
//! Configures a logger writing both channels to stderr and logs at every
//! level: DEBUG and INFO come out compact, WARNING and above verbose.
//!
//! Run with: cargo run --example basic_usage

use channel_logger::prelude::*;
use channel_logger::{critical, debug, error, info, warning};

fn main() -> Result<()> {
    println!("=== Channel Logger - Basic Usage Example ===\n");

    let registry = LoggerRegistry::new();

    // Both channels write to stderr
    let logger = configure(&registry, "basic_usage", None)?;

    println!("1. Informational channel (compact):");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");

    println!("\n2. Alert channel (verbose, with source location):");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    critical!(logger, "This is a critical message");

    println!("\n3. Raising the minimum level:");
    logger.set_min_level(LogLevel::Warning);
    println!("   Minimum level set to WARNING - debug and info won't show:");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warning("Warning message (visible)");

    println!("\n4. Re-configuring restores DEBUG without duplicating handlers:");
    let logger = configure(&registry, "basic_usage", None)?;
    println!("   Handlers: {:?}", logger.handler_names());
    logger.info("Info message (visible once)");

    registry.shutdown()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
