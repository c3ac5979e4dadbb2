//! Log handler that forwards records to a native logging facility

use super::{
    error::{HandlerError, Result},
    handler::{LogHandler, SourceLocation},
    log_level::Level,
    metadata::{merged, prettify, Metadata, MetadataValue},
    native_log::{validate_identifier, NativeLog},
};
use crate::sinks::PlatformLog;
use std::fmt;
use std::sync::Arc;

/// Adapter between the generic [`LogHandler`] contract and a [`NativeLog`].
///
/// Cloning yields an independent metadata snapshot that keeps sharing the
/// same native logger.
#[derive(Clone)]
pub struct NativeLogHandler {
    label: String,
    log_level: Level,
    metadata: Metadata,
    /// Always `prettify(&metadata)`
    pretty_metadata: Option<String>,
    native: Arc<dyn NativeLog>,
}

impl NativeLogHandler {
    /// Create a handler backed by the platform logger for `label` (as
    /// subsystem) and `category`.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::InvalidIdentifier`] if either identifier
    /// contains a NUL byte.
    pub fn new(label: impl Into<String>, category: &str) -> Result<Self> {
        let label = label.into();
        validate_identifier("subsystem", &label)?;
        validate_identifier("category", category)?;

        let native = PlatformLog::new(&label, category);
        Ok(Self::with_native(label, Arc::new(native)))
    }

    /// Create a handler around an existing native logger, which may be shared
    /// with other handlers.
    pub fn with_native(label: impl Into<String>, native: Arc<dyn NativeLog>) -> Self {
        Self {
            label: label.into(),
            log_level: Level::default(),
            metadata: Metadata::new(),
            pretty_metadata: None,
            native,
        }
    }

    #[must_use]
    pub fn builder() -> NativeLogHandlerBuilder {
        NativeLogHandlerBuilder::new()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn native(&self) -> &Arc<dyn NativeLog> {
        &self.native
    }

    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    pub fn metadata_ref(&self) -> &Metadata {
        &self.metadata
    }

    pub fn pretty_metadata(&self) -> Option<&str> {
        self.pretty_metadata.as_deref()
    }

    /// Build the text that `log` hands to the native logger.
    ///
    /// Call-site entries win over the handler's own entries; the merge is
    /// discarded afterwards.
    pub fn render(&self, message: &dyn fmt::Display, call_site: Option<&Metadata>) -> String {
        let combined;
        let pretty = match call_site {
            Some(overrides) if !overrides.is_empty() => {
                combined = prettify(&merged(&self.metadata, overrides));
                combined.as_deref()
            }
            _ => self.pretty_metadata.as_deref(),
        };

        let mut text = message.to_string();
        if let Some(pretty) = pretty {
            text.push_str(" -- ");
            text.push_str(pretty);
        }
        text
    }

    fn dispatch(&self, level: Level, text: &str) {
        match level {
            Level::Trace => self.native.trace(text),
            Level::Debug => self.native.debug(text),
            Level::Info => self.native.info(text),
            Level::Notice => self.native.notice(text),
            Level::Warning => self.native.warning(text),
            Level::Error => self.native.error(text),
            Level::Critical => self.native.critical(text),
        }
    }

    fn refresh_pretty_metadata(&mut self) {
        self.pretty_metadata = prettify(&self.metadata);
    }
}

impl LogHandler for NativeLogHandler {
    fn log(
        &self,
        level: Level,
        message: &dyn fmt::Display,
        metadata: Option<&Metadata>,
        _location: &SourceLocation<'_>,
    ) {
        let text = self.render(message, metadata);
        self.dispatch(level, &text);
    }

    fn log_level(&self) -> Level {
        self.log_level
    }

    fn set_log_level(&mut self, level: Level) {
        self.log_level = level;
    }

    fn get_metadata(&self, key: &str) -> Option<MetadataValue> {
        self.metadata.get(key).cloned()
    }

    fn set_metadata(&mut self, key: &str, value: Option<MetadataValue>) {
        match value {
            Some(value) => {
                self.metadata.insert(key.to_string(), value);
            }
            None => {
                self.metadata.remove(key);
            }
        }
        self.refresh_pretty_metadata();
    }

    fn metadata(&self) -> Metadata {
        self.metadata.clone()
    }

    fn replace_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
        self.refresh_pretty_metadata();
    }
}

impl fmt::Debug for NativeLogHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeLogHandler")
            .field("label", &self.label)
            .field("log_level", &self.log_level)
            .field("metadata", &self.metadata)
            .field("native", &self.native.name())
            .finish()
    }
}

/// Builder for constructing a NativeLogHandler with a fluent API
///
/// # Example
/// ```
/// use native_log_handler::prelude::*;
///
/// let handler = NativeLogHandler::builder()
///     .label("com.example.app")
///     .category("network")
///     .log_level(Level::Debug)
///     .metadata("region", "eu-west-1")
///     .build()
///     .unwrap();
///
/// assert_eq!(handler.pretty_metadata(), Some("region=eu-west-1"));
/// ```
pub struct NativeLogHandlerBuilder {
    label: Option<String>,
    category: String,
    native: Option<Arc<dyn NativeLog>>,
    log_level: Level,
    metadata: Metadata,
}

impl NativeLogHandlerBuilder {
    /// Default category used when none is given
    pub const DEFAULT_CATEGORY: &'static str = "default";

    pub fn new() -> Self {
        Self {
            label: None,
            category: Self::DEFAULT_CATEGORY.to_string(),
            native: None,
            log_level: Level::default(),
            metadata: Metadata::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Category for the platform logger; ignored when `native` is set
    #[must_use = "builder methods return a new value"]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn native(mut self, native: Arc<dyn NativeLog>) -> Self {
        self.native = Some(native);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn all_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Build the handler
    ///
    /// # Errors
    ///
    /// Fails when no label was given or the platform logger rejects the
    /// identifiers.
    pub fn build(self) -> Result<NativeLogHandler> {
        let label = self
            .label
            .ok_or_else(|| HandlerError::config("NativeLogHandlerBuilder", "label is required"))?;

        let mut handler = match self.native {
            Some(native) => NativeLogHandler::with_native(label, native),
            None => NativeLogHandler::new(label, &self.category)?,
        };

        handler.set_log_level(self.log_level);
        handler.replace_metadata(self.metadata);
        Ok(handler)
    }
}

impl Default for NativeLogHandlerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
