//! File logging example
//!
//! Demonstrates both channels appending to one file, configured first with
//! the builder and then from a JSON document.
//!
//! Run with: cargo run --example file_logging

use channel_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Channel Logger - File Logging Example ===\n");

    let registry = LoggerRegistry::new();

    // Both channels append to the same file; existing content is kept
    let logger = ChannelsBuilder::new()
        .file("application.log")
        .build(&registry, "file_logging")?;

    println!("1. Logging to 'application.log':");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warning("Item 3 took longer than expected");
        }
    }

    println!("\n3. Re-configuring from JSON with RFC 3339 timestamps:");
    let config = ChannelConfig::from_json_str(
        r#"{ "log_file": "application.log", "timestamp_format": "Rfc3339" }"#,
    )?;
    let logger = config.into_builder().build(&registry, "file_logging")?;
    logger.info("All operations completed");

    registry.shutdown()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
