//! Bridge from the `log` crate facade to `LogHandler`s
//!
//! The bridge plays the front-end role: it keeps one handler per record
//! target (the label), creates missing handlers through a factory, filters
//! against each handler's level, and turns `log` key-values into call-site
//! metadata.
//!
//! ```no_run
//! use native_log_handler::LogBridge;
//!
//! LogBridge::with_category("app")
//!     .install(log::LevelFilter::Trace)
//!     .unwrap();
//!
//! log::info!(target: "com.example.app", retry = 2; "connection restored");
//! ```

use crate::core::{
    HandlerError, Level, LogHandler, Metadata, MetadataValue, NativeLogHandler, Result,
    SourceLocation,
};
use log::kv::{self, Key, Value, VisitSource};
use parking_lot::RwLock;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Creates the handler for a label seen for the first time
pub type HandlerFactory = Box<dyn Fn(&str) -> Result<Box<dyn LogHandler>> + Send + Sync>;

type HandlerSlot = Arc<RwLock<Box<dyn LogHandler>>>;

thread_local! {
    // (bridge address, label) pairs whose factory call is running on this thread
    static BUILDING: RefCell<Vec<(usize, String)>> = const { RefCell::new(Vec::new()) };
}

/// Marks a label as under construction for the current thread until dropped
struct BuildGuard {
    key: (usize, String),
}

impl BuildGuard {
    fn enter(bridge: usize, label: &str) -> Option<Self> {
        let key = (bridge, label.to_string());
        BUILDING.with(|building| {
            let mut building = building.borrow_mut();
            if building.contains(&key) {
                return None;
            }
            building.push(key.clone());
            Some(Self { key })
        })
    }
}

impl Drop for BuildGuard {
    fn drop(&mut self) {
        BUILDING.with(|building| building.borrow_mut().retain(|key| *key != self.key));
    }
}

/// `log::Log` implementation routing each target to its own `LogHandler`
///
/// Handlers are created lazily by the factory. The factory runs with no
/// bridge lock held, so it may itself log through the bridge; records it
/// emits for the label being created are dropped. A label whose factory
/// call failed is remembered and never retried until [`LogBridge::register`]
/// supplies a handler for it.
///
/// A handler is dispatched to under its own read lock only. A native logger
/// that logs back into the bridge for the same target must not race a
/// concurrent [`LogBridge::with_handler`] on that target.
pub struct LogBridge {
    factory: HandlerFactory,
    handlers: RwLock<HashMap<String, HandlerSlot>>,
    failed: RwLock<HashSet<String>>,
}

impl LogBridge {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&str) -> Result<Box<dyn LogHandler>> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            handlers: RwLock::new(HashMap::new()),
            failed: RwLock::new(HashSet::new()),
        }
    }

    /// Bridge that builds a platform `NativeLogHandler` per target, all in
    /// one category
    pub fn with_category(category: impl Into<String>) -> Self {
        let category = category.into();
        Self::new(move |label| {
            let handler = NativeLogHandler::new(label, &category)?;
            Ok(Box::new(handler) as Box<dyn LogHandler>)
        })
    }

    /// Use `handler` for `label` instead of asking the factory
    pub fn register(&self, label: impl Into<String>, handler: Box<dyn LogHandler>) {
        let label = label.into();
        self.failed.write().remove(&label);
        self.handlers
            .write()
            .insert(label, Arc::new(RwLock::new(handler)));
    }

    pub fn is_registered(&self, label: &str) -> bool {
        self.handlers.read().contains_key(label)
    }

    /// Whether the factory failed for `label`
    pub fn has_failed(&self, label: &str) -> bool {
        self.failed.read().contains(label)
    }

    /// Run `f` against the handler for `label`, creating it on first use
    ///
    /// Returns `None` when no handler can be had: the factory failed (now or
    /// on an earlier call) or `label` is already being created on this
    /// thread. A factory failure is reported once per label on stderr.
    pub fn with_handler<R>(
        &self,
        label: &str,
        f: impl FnOnce(&mut dyn LogHandler) -> R,
    ) -> Option<R> {
        let slot = self.slot(label)?;
        let mut handler = slot.write();
        Some(f(handler.as_mut()))
    }

    /// Install as the global `log` logger
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::SetLogger`] if a logger is already installed.
    pub fn install(self, max_level: log::LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    fn slot(&self, label: &str) -> Option<HandlerSlot> {
        if let Some(slot) = self.handlers.read().get(label) {
            return Some(Arc::clone(slot));
        }
        if self.has_failed(label) {
            return None;
        }

        let _guard = BuildGuard::enter(self as *const Self as usize, label)?;
        match (self.factory)(label) {
            Ok(handler) => {
                let mut handlers = self.handlers.write();
                let slot = handlers
                    .entry(label.to_string())
                    .or_insert_with(|| Arc::new(RwLock::new(handler)));
                Some(Arc::clone(slot))
            }
            Err(e) => {
                if self.failed.write().insert(label.to_string()) {
                    eprintln!(
                        "[NATIVE LOG ERROR] Failed to create handler for '{}': {}",
                        label, e
                    );
                }
                None
            }
        }
    }

    fn read_handler<R>(&self, label: &str, f: impl FnOnce(&dyn LogHandler) -> R) -> Option<R> {
        let slot = self.slot(label)?;
        let handler = slot.read();
        Some(f(handler.as_ref()))
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let level = Level::from(metadata.level());
        self.read_handler(metadata.target(), |handler| level >= handler.log_level())
            .unwrap_or(false)
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        self.read_handler(record.target(), |handler| {
            if level < handler.log_level() {
                return;
            }

            let call_site = call_site_metadata(record);
            let location = SourceLocation::new(
                record.file().unwrap_or("<unknown>"),
                record.module_path().unwrap_or("<unknown>"),
                record.line().unwrap_or(0),
            );
            handler.log(level, record.args(), call_site.as_ref(), &location);
        });
    }

    fn flush(&self) {}
}

struct MetadataCollector(Metadata);

impl<'kvs> VisitSource<'kvs> for MetadataCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> std::result::Result<(), kv::Error> {
        self.0
            .insert(key.as_str().to_string(), MetadataValue::String(value.to_string()));
        Ok(())
    }
}

/// Collect a record's key-values, or `None` when it carries none
fn call_site_metadata(record: &log::Record) -> Option<Metadata> {
    let source = record.key_values();
    if source.count() == 0 {
        return None;
    }

    let mut collector = MetadataCollector(Metadata::new());
    if let Err(e) = source.visit(&mut collector) {
        eprintln!("[NATIVE LOG WARNING] Dropped unreadable key-values: {}", e);
    }
    Some(collector.0)
}
