//! Console native logger
//!
//! Platform logger on targets without unified logging. Writes one
//! timestamped line per record; error and critical go to stderr.

use crate::core::{Level, NativeLog};
#[cfg(feature = "console")]
use colored::Colorize;
use chrono::{DateTime, Utc};

/// Default timestamp layout, ISO 8601 with milliseconds
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub struct ConsoleLog {
    subsystem: String,
    category: String,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    timestamp_format: String,
}

impl ConsoleLog {
    pub fn new(subsystem: &str, category: &str) -> Self {
        Self {
            subsystem: subsystem.to_string(),
            category: category.to_string(),
            use_colors: cfg!(feature = "console"),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Enable or disable colored level tags
    ///
    /// Has no effect without the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set a strftime-compatible timestamp format
    ///
    /// # Examples
    ///
    /// ```
    /// use native_log_handler::sinks::ConsoleLog;
    ///
    /// let console = ConsoleLog::new("com.example.app", "net")
    ///     .with_timestamp_format("%d/%b/%Y:%H:%M:%S %z");
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format_str: &str) -> Self {
        self.timestamp_format = format_str.to_string();
        self
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Format one output line
    pub fn format_line(&self, level: Level, message: &str, timestamp: &DateTime<Utc>) -> String {
        format!(
            "[{}] [{}] {}:{} - {}",
            timestamp.format(&self.timestamp_format),
            self.level_tag(level),
            self.subsystem,
            self.category,
            message
        )
    }

    #[cfg(feature = "console")]
    fn level_tag(&self, level: Level) -> String {
        let tag = format!("{:8}", level.to_str());
        if self.use_colors {
            tag.color(level.color_code()).to_string()
        } else {
            tag
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_tag(&self, level: Level) -> String {
        format!("{:8}", level.to_str())
    }

    fn write(&self, level: Level, message: &str) {
        let line = self.format_line(level, message, &Utc::now());
        match level {
            Level::Error | Level::Critical => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

impl NativeLog for ConsoleLog {
    fn trace(&self, message: &str) {
        self.write(Level::Trace, message);
    }

    fn debug(&self, message: &str) {
        self.write(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    fn notice(&self, message: &str) {
        self.write(Level::Notice, message);
    }

    fn warning(&self, message: &str) {
        self.write(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }

    fn critical(&self, message: &str) {
        self.write(Level::Critical, message);
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
    }

    #[test]
    fn test_format_line_plain() {
        let console = ConsoleLog::new("app", "net").with_colors(false);
        let line = console.format_line(Level::Notice, "connected -- peer=a", &fixed_time());
        assert_eq!(
            line,
            "[2025-01-08T10:30:45.000Z] [NOTICE  ] app:net - connected -- peer=a"
        );
    }

    #[test]
    fn test_custom_timestamp() {
        let console = ConsoleLog::new("app", "net")
            .with_colors(false)
            .with_timestamp_format("%H:%M:%S");
        let line = console.format_line(Level::Critical, "down", &fixed_time());
        assert_eq!(line, "[10:30:45] [CRITICAL] app:net - down");
    }

    #[test]
    fn test_emit_all_levels() {
        let console = ConsoleLog::new("app", "net").with_colors(false);
        console.trace("trace");
        console.debug("debug");
        console.info("info");
        console.notice("notice");
        console.warning("warning");
        console.error("error");
        console.critical("critical");
        assert_eq!(console.name(), "console");
    }
}
