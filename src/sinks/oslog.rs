//! Apple unified logging (`os_log`) native logger
//!
//! Unified logging has five log types. The seven generic severities fold
//! into them the same way Apple's `Logger` does:
//!
//! | severity | os_log type |
//! |----------|-------------|
//! | trace    | debug       |
//! | debug    | debug       |
//! | info     | info        |
//! | notice   | default     |
//! | warning  | error       |
//! | error    | error       |
//! | critical | fault       |

use crate::core::{Level, NativeLog};
use ::oslog::{Level as OsLogLevel, OsLog};

pub struct OsLogSink {
    subsystem: String,
    category: String,
    log: OsLog,
}

impl OsLogSink {
    /// `oslog` rewrites interior NUL bytes to `(null)`, so identifiers are
    /// validated before a sink is built rather than silently altered here.
    pub fn new(subsystem: &str, category: &str) -> Self {
        Self {
            subsystem: subsystem.to_string(),
            category: category.to_string(),
            log: OsLog::new(subsystem, category),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The os_log type a severity is written with
    pub fn os_log_level(level: Level) -> OsLogLevel {
        match level {
            Level::Trace | Level::Debug => OsLogLevel::Debug,
            Level::Info => OsLogLevel::Info,
            Level::Notice => OsLogLevel::Default,
            Level::Warning | Level::Error => OsLogLevel::Error,
            Level::Critical => OsLogLevel::Fault,
        }
    }

    fn write(&self, level: Level, message: &str) {
        self.log.with_level(Self::os_log_level(level), message);
    }
}

impl NativeLog for OsLogSink {
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
        "oslog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_folding() {
        assert!(matches!(OsLogSink::os_log_level(Level::Trace), OsLogLevel::Debug));
        assert!(matches!(OsLogSink::os_log_level(Level::Notice), OsLogLevel::Default));
        assert!(matches!(OsLogSink::os_log_level(Level::Warning), OsLogLevel::Error));
        assert!(matches!(OsLogSink::os_log_level(Level::Critical), OsLogLevel::Fault));
    }

    #[test]
    fn test_emit() {
        let sink = OsLogSink::new("com.example.native-log-handler", "tests");
        for level in Level::ALL {
            sink.write(level, "unified logging smoke test");
        }
        assert_eq!(sink.subsystem(), "com.example.native-log-handler");
    }
}
