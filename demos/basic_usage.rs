// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the kvcfg crate.
//!
//! This example demonstrates:
//! - Parsing an embedded configuration document
//! - Reading inferred boolean, number and string values
//! - Walking all entries in document order
//! - Reporting parse and duplicate-key errors
//!
//! To run this example:
//! ```bash
//! # Optionally point it at a file of your own
//! cargo run --example basic_usage -- ./app.conf
//! ```

use kvcfg::prelude::*;

const EMBEDDED: &str = "\
# config
name = MyApp
debug=on
retries = 3
timeout = 2.5
";

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== kvcfg: Basic Usage ===\n");

    let parser = match std::env::args().nth(1) {
        #[cfg(feature = "file")]
        Some(path) => ConfigParser::from_source(&FileSource::from_file(path)?, true)?,
        #[cfg(not(feature = "file"))]
        Some(_) => ConfigParser::from_source(&TextSource::new(EMBEDDED), true)?,
        None => ConfigParser::from_source(&TextSource::new(EMBEDDED).with_name("embedded"), true)?,
    };

    // Example 1: Typed lookups
    println!("--- Example 1: Typed Values ---");
    match parser.get("name").and_then(ConfigValue::as_str) {
        Some(name) => println!("✓ name: {}", name),
        None => println!("✗ name not set"),
    }
    match parser.get("debug").and_then(ConfigValue::as_bool) {
        Some(debug) => println!("✓ debug: {} (boolean)", debug),
        None => println!("✗ debug not set or not a boolean"),
    }
    match parser.get("retries").and_then(ConfigValue::as_i64) {
        Some(retries) => println!("✓ retries: {} (integer)", retries),
        None => println!("✗ retries not set or not an integer"),
    }

    // Example 2: All entries
    println!("\n--- Example 2: All Entries ---");
    for (key, value) in parser.entries() {
        println!("  {} = {} ({})", key, value, value.type_name());
    }

    // Example 3: Errors carry the line that caused them
    println!("\n--- Example 3: Errors ---");
    for broken in ["a = 1\ngarbage", "a=1=2", "x = 1\nx = 2"] {
        if let Err(e) = ConfigParser::new(broken) {
            match e.kind() {
                ErrorKind::Parse | ErrorKind::DuplicateIndex => {
                    println!("✗ {} at line {:?}: {}", e.kind(), e.line(), e)
                }
                _ => println!("✗ {}", e),
            }
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
