//! Tests for the bridge installed as the global `log` logger
//!
//! The global logger can be set once per process, so this file holds a
//! single test.

use native_log_handler::prelude::*;
use native_log_handler::sinks::ChannelLog;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_factory_logging_after_install() {
    let (sink, rx) = ChannelLog::unbounded("install", "test");
    let sink = Arc::new(sink);

    let factory_sink = sink.clone();
    let bridge = LogBridge::new(move |label| {
        log::info!(target: "factory", "building handler for {}", label);
        log::info!(target: "audit", "building handler for {}", label);
        Ok(Box::new(NativeLogHandler::with_native(label, factory_sink.clone()))
            as Box<dyn LogHandler>)
    });
    bridge.register(
        "audit",
        Box::new(NativeLogHandler::with_native("audit", sink.clone())),
    );
    bridge.install(log::LevelFilter::Info).expect("first install");

    let (done_tx, done_rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || {
        log::info!(target: "app", "hello");
        let _ = done_tx.send(());
    });
    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("logging through the bridge finished");

    let messages: Vec<String> = rx.try_iter().map(|r| r.message).collect();
    assert!(messages.contains(&"hello".to_string()));
    assert!(messages.contains(&"building handler for app".to_string()));
    assert!(messages.contains(&"building handler for factory".to_string()));
}
