//! Lock-guarded handler for concurrent metadata mutation
//!
//! `NativeLogHandler` needs `&mut self` to change metadata, so concurrent
//! callers either hold their own clone or share one `SharedLogHandler`.

use super::{
    handler::{LogHandler, SourceLocation},
    log_level::Level,
    metadata::{Metadata, MetadataValue},
    native_handler::NativeLogHandler,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Thread-safe handle to one `NativeLogHandler`
///
/// Clones share state: a metadata change through any clone is seen by all of
/// them. Logging takes a read lock; mutation takes the write lock and
/// refreshes the cached metadata rendering before releasing it.
///
/// # Example
///
/// ```
/// use native_log_handler::prelude::*;
/// use native_log_handler::sinks::ChannelLog;
/// use std::sync::Arc;
///
/// let (sink, records) = ChannelLog::unbounded("app", "worker");
/// let shared = SharedLogHandler::new(NativeLogHandler::with_native("app", Arc::new(sink)));
///
/// let mut writer = shared.clone();
/// std::thread::spawn(move || writer.set_metadata("job", Some("42".into())))
///     .join()
///     .unwrap();
///
/// shared.log(Level::Info, &"done", None, &SourceLocation::new(file!(), "main", line!()));
/// assert_eq!(records.recv().unwrap().message, "done -- job=42");
/// ```
#[derive(Clone)]
pub struct SharedLogHandler {
    label: Arc<str>,
    inner: Arc<RwLock<NativeLogHandler>>,
}

impl SharedLogHandler {
    pub fn new(handler: NativeLogHandler) -> Self {
        Self {
            label: Arc::from(handler.label()),
            inner: Arc::new(RwLock::new(handler)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Copy out the current state as an independent handler
    pub fn snapshot(&self) -> NativeLogHandler {
        self.inner.read().clone()
    }

    pub fn pretty_metadata(&self) -> Option<String> {
        self.inner.read().pretty_metadata().map(str::to_string)
    }

    /// Run several mutations under one write lock
    pub fn update<R>(&self, f: impl FnOnce(&mut NativeLogHandler) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl LogHandler for SharedLogHandler {
    fn log(
        &self,
        level: Level,
        message: &dyn fmt::Display,
        metadata: Option<&Metadata>,
        location: &SourceLocation<'_>,
    ) {
        self.inner.read().log(level, message, metadata, location);
    }

    fn log_level(&self) -> Level {
        self.inner.read().log_level()
    }

    fn set_log_level(&mut self, level: Level) {
        self.inner.write().set_log_level(level);
    }

    fn get_metadata(&self, key: &str) -> Option<MetadataValue> {
        self.inner.read().get_metadata(key)
    }

    fn set_metadata(&mut self, key: &str, value: Option<MetadataValue>) {
        self.inner.write().set_metadata(key, value);
    }

    fn metadata(&self) -> Metadata {
        self.inner.read().metadata()
    }

    fn replace_metadata(&mut self, metadata: Metadata) {
        self.inner.write().replace_metadata(metadata);
    }
}

impl fmt::Debug for SharedLogHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLogHandler")
            .field("inner", &*self.inner.read())
            .finish()
    }
}
