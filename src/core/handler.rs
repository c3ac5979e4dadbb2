//! LogHandler trait consumed by logging front-ends

use super::log_level::Level;
use super::metadata::{Metadata, MetadataValue};
use std::fmt;

/// Call-site information captured by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> SourceLocation<'a> {
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// Backend capability a logging front-end routes records through.
///
/// The front-end owns filtering against [`LogHandler::log_level`]; `log` is
/// called only for records that passed it and must never fail.
pub trait LogHandler: Send + Sync {
    /// Emit one record. `metadata` holds per-call entries that override the
    /// handler's own metadata for this call only.
    fn log(
        &self,
        level: Level,
        message: &dyn fmt::Display,
        metadata: Option<&Metadata>,
        location: &SourceLocation<'_>,
    );

    fn log_level(&self) -> Level;

    fn set_log_level(&mut self, level: Level);

    fn get_metadata(&self, key: &str) -> Option<MetadataValue>;

    /// Insert `value` under `key`, or remove the entry when `value` is `None`.
    fn set_metadata(&mut self, key: &str, value: Option<MetadataValue>);

    fn metadata(&self) -> Metadata;

    fn replace_metadata(&mut self, metadata: Metadata);
}
