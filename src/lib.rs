//! # Native Log Handler
//!
//! A log handler backend that routes structured log records to the
//! platform-native logging facility.
//!
//! ## Features
//!
//! - **Unified Logging**: Records go to `os_log` on Apple platforms and to a
//!   timestamped console sink elsewhere
//! - **Structured Metadata**: Per-handler and per-call `key=value` context
//! - **Seven Severities**: trace, debug, info, notice, warning, error, critical
//! - **Front-end Agnostic**: Implement or consume the [`LogHandler`] trait, or
//!   plug into the `log` crate through [`LogBridge`]
//!
//! ## Example
//!
//! ```
//! use native_log_handler::prelude::*;
//!
//! let mut handler = NativeLogHandler::new("com.example.app", "network")?;
//! handler.set_metadata("req_id", Some("abc".into()));
//!
//! let mut retry = Metadata::new();
//! retry.insert("retry".to_string(), "2".into());
//! assert_eq!(handler.render(&"timeout", Some(&retry)), "timeout -- req_id=abc retry=2");
//!
//! handler.log(Level::Error, &"timeout", Some(&retry), &SourceLocation::new(file!(), "main", line!()));
//! # Ok::<(), native_log_handler::HandlerError>(())
//! ```

pub mod bridge;
pub mod core;
pub mod sinks;

pub mod prelude {
    pub use crate::bridge::LogBridge;
    pub use crate::core::{
        HandlerConfig, HandlerError, Level, LogHandler, Metadata, MetadataValue, NativeLog,
        NativeLogHandler, NativeLogHandlerBuilder, Result, SharedLogHandler, SinkMetrics,
        SourceLocation,
    };
}

pub use bridge::LogBridge;
pub use crate::core::{
    prettify, HandlerConfig, HandlerError, Level, LogHandler, Metadata, MetadataValue, NativeLog,
    NativeLogHandler, NativeLogHandlerBuilder, Result, SharedLogHandler, SinkMetrics,
    SourceLocation,
};
pub use sinks::{ChannelLog, ConsoleLog, NativeRecord, PlatformLog};
