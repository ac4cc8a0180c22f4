//! Basic usage example
//!
//! Demonstrates building loggers from options, deriving loggers with extra
//! attributes and fanning records out to a UDP collector.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_fanout::core::config::{with_json, with_level, with_secondary_sink, with_source};
use rust_logger_fanout::prelude::*;
use rust_logger_fanout::{info, warn};
use std::net::UdpSocket;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Logger Fanout - Basic Usage Example ===\n");

    // Defaults: Info level, JSON with source, installed as default
    println!("1. Default JSON logger:");
    let logger = new_logger([])?;
    logger.debug("hidden, below Info");
    logger.info("service started");

    println!("\n2. Text logger without source, Warn and above:");
    let text = new_logger([with_level("warn"), with_json(false), with_source(false)])?;
    text.info("dropped");
    text.log_attrs(LogLevel::Warn, "cache miss", [attr("key", "user:42")]);

    println!("\n3. Context accessors:");
    let ctx = Context::new();
    let request = with_attrs(&ctx, [attr("req_id", "abc"), attr("user", 42)]);
    warn!(request, "slow request took {}ms", 950; "route" => "/users");
    default_logger().warn("the default logger has no request attributes");

    println!("\n4. Fan-out to a local UDP collector:");
    let collector = UdpSocket::bind("127.0.0.1:0")?;
    collector.set_read_timeout(Some(Duration::from_secs(1)))?;
    let address = collector.local_addr()?.to_string();

    let fanout = new_logger([with_secondary_sink(true, address)])?;
    info!(fanout, "shipped to both destinations"; "attempt" => 1);

    let mut buf = [0u8; 4096];
    match collector.recv(&mut buf) {
        Ok(len) => print!("   collector got: {}", String::from_utf8_lossy(&buf[..len])),
        Err(e) => println!("   collector received nothing: {}", e),
    }

    println!("\n5. Unreachable secondary sink:");
    match new_logger([with_secondary_sink(true, "no-port-here")]) {
        Ok(_) => println!("   unexpectedly built"),
        Err(e) => println!("   rejected: {}", e),
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
