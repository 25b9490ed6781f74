//! Execution timing example
//!
//! Times successful, failing and slow calls, and wraps a closure so every
//! invocation is timed.
//!
//! Run with: cargo run --example timed_calls

use std::num::ParseIntError;
use std::thread;
use std::time::Duration;
use timed_logger::prelude::*;

fn parse_quantity(raw: &str) -> std::result::Result<u32, ParseIntError> {
    raw.trim().parse()
}

fn main() -> Result<()> {
    println!("=== Timed Logger - Execution Timing Example ===\n");

    let logger = Logger::builder("timed_calls")
        .level("debug")
        .log_dir("logs")
        .build()?;

    println!("\n1. Success and failure:");
    let timed = logger.time_logger(TimingConfig::new().with_args(true));

    let args = CallArgs::positional(&("12",));
    let qty = timed.call(&function_id!(parse_quantity), &args, || parse_quantity("12"));
    println!("   parsed: {:?}", qty);

    let args = CallArgs::positional(&("twelve",));
    let qty = timed.call(&function_id!(parse_quantity), &args, || parse_quantity("twelve"));
    println!("   parsed: {:?}", qty);

    println!("\n2. Only report calls slower than 100ms:");
    let slow_only =
        logger.time_logger(TimingConfig::new().with_threshold(Duration::from_millis(100)));
    slow_only.run(&function_id!("cache_lookup"), &CallArgs::none(), || {
        thread::sleep(Duration::from_millis(5))
    });
    slow_only.run(&function_id!("rebuild_index"), &CallArgs::none(), || {
        thread::sleep(Duration::from_millis(150))
    });

    println!("\n3. Wrapped closure:");
    let checked_div = logger
        .time_logger(TimingConfig::new().with_args(true))
        .wrap(function_id!(checked_div), |(a, b): (i64, i64)| {
            a.checked_div(b).ok_or("division by zero")
        });
    println!("   10 / 3 = {:?}", checked_div((10, 3)));
    println!("   1 / 0 = {:?}", checked_div((1, 0)));

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
