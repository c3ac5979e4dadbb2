//! Declarative handler configuration
//!
//! ```
//! use native_log_handler::{HandlerConfig, Level};
//!
//! let config = HandlerConfig::from_json(
//!     r#"{ "label": "com.example.app", "category": "net",
//!          "log_level": "notice", "metadata": { "region": "eu" } }"#,
//! ).unwrap();
//!
//! assert_eq!(config.log_level, Level::Notice);
//! let handler = config.build().unwrap();
//! assert_eq!(handler.pretty_metadata(), Some("region=eu"));
//! ```

use super::{
    error::{HandlerError, Result},
    log_level::Level,
    metadata::Metadata,
    native_handler::{NativeLogHandler, NativeLogHandlerBuilder},
    native_log::{validate_identifier, NativeLog},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn default_category() -> String {
    NativeLogHandlerBuilder::DEFAULT_CATEGORY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Logger label, also the native subsystem
    pub label: String,

    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default)]
    pub log_level: Level,

    /// Initial handler metadata
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl HandlerConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            category: default_category(),
            log_level: Level::default(),
            metadata: Metadata::new(),
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(HandlerError::config("HandlerConfig", "label must not be empty"));
        }
        validate_identifier("subsystem", &self.label)?;
        validate_identifier("category", &self.category)?;
        Ok(())
    }

    /// Build a handler backed by the platform logger
    pub fn build(&self) -> Result<NativeLogHandler> {
        self.validate()?;
        self.builder().category(self.category.clone()).build()
    }

    /// Build a handler around an existing native logger; `category` is unused
    pub fn build_with_native(&self, native: Arc<dyn NativeLog>) -> Result<NativeLogHandler> {
        self.validate()?;
        self.builder().native(native).build()
    }

    fn builder(&self) -> NativeLogHandlerBuilder {
        NativeLogHandler::builder()
            .label(self.label.clone())
            .log_level(self.log_level)
            .all_metadata(self.metadata.clone())
    }
}
