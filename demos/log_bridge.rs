//! `log` crate bridge example
//!
//! Installs a bridge so `log` macros reach the platform logger, with one
//! handler per target.
//!
//! Run with: cargo run --example log_bridge

use native_log_handler::prelude::*;

fn main() -> Result<()> {
    println!("=== Native Log Handler - log Bridge Example ===\n");

    let bridge = LogBridge::new(|label| {
        let handler = NativeLogHandler::builder()
            .label(label)
            .category("bridge-demo")
            .log_level(Level::Debug)
            .metadata("pid", std::process::id())
            .build()?;
        Ok(Box::new(handler) as Box<dyn LogHandler>)
    });

    // Quieter handler for one noisy target
    let mut noisy = NativeLogHandler::new("com.example.noisy", "bridge-demo")?;
    noisy.set_log_level(Level::Warning);
    bridge.register("com.example.noisy", Box::new(noisy));

    bridge.install(Level::Trace.to_level_filter())?;

    log::debug!(target: "com.example.api", "Routes loaded");
    log::info!(target: "com.example.api", status = 200, path = "/health"; "Request served");
    log::info!(target: "com.example.noisy", "Filtered out by the handler level");
    log::warn!(target: "com.example.noisy", "Still shown");
    log::error!(target: "com.example.db", "Connection lost");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
