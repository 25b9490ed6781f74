//! Timed HTTP call example
//!
//! Times a request with the reqwest-backed client. Pass a URL as the first
//! argument to try another endpoint.
//!
//! Run with: cargo run --example api_timing -- https://httpbin.org/get

use std::env;
use std::time::Duration;
use timed_logger::api::{ApiRequest, ReqwestClient};
use timed_logger::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Timed Logger - API Timing Example ===\n");

    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/get".to_string());

    let logger = Logger::builder("api_timing")
        .level("info")
        .log_dir("logs")
        .build()?;
    let client = ReqwestClient::new()?;

    let request = ApiRequest::get(url.as_str())
        .header("Accept", "application/json")
        .timeout(Duration::from_secs(10));

    match logger.measure_api_call(&client, request) {
        Ok(result) => println!(
            "\nStatus {} in {:?} ({} bytes)",
            result.status_code,
            result.elapsed,
            result.response.body.len()
        ),
        Err(e) => println!("\nRequest failed: {}", e),
    }

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
