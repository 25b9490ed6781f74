//! Basic logger usage example
//!
//! Demonstrates the dual file/console logger, level selection and
//! dispatch by level name.
//!
//! Run with: cargo run --example basic_usage

use timed_logger::prelude::*;
use timed_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Timed Logger - Basic Usage Example ===\n");

    // "all" lets every level through on both sinks
    let logger = Logger::builder("basic_usage")
        .level("all")
        .log_dir("logs")
        .console_colors(true)
        .build()?;

    println!("\n1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. Dispatch by level name:");
    logger.log("Info", "Level names are case-insensitive");
    logger.log("verbose", "Unknown levels become a warning");

    println!("\n3. Formatting macros:");
    let port = 8080;
    info!(logger, "Listening on port {}", port);
    warning!(logger, "Cache hit rate {:.1}%", 42.5);

    println!("\n4. A stricter logger on its own file:");
    let quiet = Logger::builder("basic_usage_quiet")
        .level("warning")
        .log_dir("logs")
        .build()?;
    quiet.info("Info message (hidden)");
    quiet.warning("Warning message (visible)");

    logger.flush()?;
    println!("\nLog file: {}", logger.log_file_path().display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
