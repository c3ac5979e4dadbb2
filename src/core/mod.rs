//! Core handler types and traits

pub mod config;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod metadata;
pub mod metrics;
pub mod native_handler;
pub mod native_log;
pub mod shared;

pub use config::HandlerConfig;
pub use error::{HandlerError, Result};
pub use handler::{LogHandler, SourceLocation};
pub use log_level::Level;
pub use metadata::{prettify, Metadata, MetadataValue};
pub use metrics::SinkMetrics;
pub use native_handler::{NativeLogHandler, NativeLogHandlerBuilder};
pub use native_log::NativeLog;
pub use shared::SharedLogHandler;
