//! Native logger implementations

pub mod channel;
pub mod console;

#[cfg(target_vendor = "apple")]
pub mod oslog;

pub use channel::{ChannelLog, NativeRecord};
pub use console::ConsoleLog;

#[cfg(target_vendor = "apple")]
pub use self::oslog::OsLogSink;

/// Native logger built by `NativeLogHandler::new` on this platform
#[cfg(target_vendor = "apple")]
pub type PlatformLog = OsLogSink;

/// Native logger built by `NativeLogHandler::new` on this platform
#[cfg(not(target_vendor = "apple"))]
pub type PlatformLog = ConsoleLog;

pub use crate::core::NativeLog;
