//! Basic handler usage example
//!
//! Demonstrates metadata, call-site overrides, and the seven severities on
//! the platform logger (`os_log` on Apple platforms, the console elsewhere).
//!
//! Run with: cargo run --example basic_usage

use native_log_handler::prelude::*;

fn main() -> Result<()> {
    println!("=== Native Log Handler - Basic Usage Example ===\n");

    let here = SourceLocation::new(file!(), "main", line!());
    let mut handler = NativeLogHandler::new("com.example.basic", "demo")?;

    println!("1. Logging at every level:");
    for level in Level::ALL {
        handler.log(level, &format_args!("This is a {} message", level), None, &here);
    }

    println!("\n2. Handler metadata:");
    handler.set_metadata("session", Some("7f3a".into()));
    handler.set_metadata("attempt", Some(1_i32.into()));
    handler.log(Level::Info, &"Connected", None, &here);

    println!("\n3. Call-site metadata overrides handler metadata for one call:");
    let mut call_site = Metadata::new();
    call_site.insert("attempt".to_string(), 2_i32.into());
    handler.log(Level::Warning, &"Retrying", Some(&call_site), &here);
    handler.log(Level::Info, &"Back to handler metadata", None, &here);

    println!("\n4. Removing metadata:");
    handler.set_metadata("session", None);
    handler.set_metadata("attempt", None);
    handler.log(Level::Notice, &"No suffix any more", None, &here);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
