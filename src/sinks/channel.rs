//! Channel-backed native logger
//!
//! Forwards every emission as a [`NativeRecord`] to a receiver owned by the
//! caller. Sending never blocks: when the channel is full or the receiver is
//! gone the record is dropped and counted.

use crate::core::{Level, NativeLog, SinkMetrics};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use std::sync::Arc;

/// One emission as seen by the native facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeRecord {
    pub subsystem: String,
    pub category: String,
    pub level: Level,
    pub message: String,
}

pub struct ChannelLog {
    subsystem: String,
    category: String,
    sender: Sender<NativeRecord>,
    metrics: Arc<SinkMetrics>,
}

impl ChannelLog {
    /// Create a sink whose channel holds at most `capacity` pending records
    pub fn bounded(
        subsystem: impl Into<String>,
        category: impl Into<String>,
        capacity: usize,
    ) -> (Self, Receiver<NativeRecord>) {
        let (sender, receiver) = bounded(capacity);
        (Self::from_sender(subsystem, category, sender), receiver)
    }

    pub fn unbounded(
        subsystem: impl Into<String>,
        category: impl Into<String>,
    ) -> (Self, Receiver<NativeRecord>) {
        let (sender, receiver) = unbounded();
        (Self::from_sender(subsystem, category, sender), receiver)
    }

    fn from_sender(
        subsystem: impl Into<String>,
        category: impl Into<String>,
        sender: Sender<NativeRecord>,
    ) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
            sender,
            metrics: Arc::new(SinkMetrics::new()),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    fn send(&self, level: Level, message: &str) {
        let record = NativeRecord {
            subsystem: self.subsystem.clone(),
            category: self.category.clone(),
            level,
            message: message.to_string(),
        };

        match self.sender.try_send(record) {
            Ok(()) => {
                self.metrics.record_emitted_at(level);
            }
            Err(TrySendError::Full(_)) => {
                let dropped_count = self.metrics.record_dropped();
                // Alert on first drop and periodically thereafter
                if dropped_count == 0 || (dropped_count + 1) % 1000 == 0 {
                    eprintln!(
                        "[NATIVE LOG WARNING] Channel for {}:{} full, {} records dropped.",
                        self.subsystem,
                        self.category,
                        dropped_count + 1
                    );
                }
            }
            Err(TrySendError::Disconnected(_)) => {
                // Receiver gone, nothing left to deliver to
                self.metrics.record_dropped();
            }
        }
    }
}

impl NativeLog for ChannelLog {
    fn trace(&self, message: &str) {
        self.send(Level::Trace, message);
    }

    fn debug(&self, message: &str) {
        self.send(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.send(Level::Info, message);
    }

    fn notice(&self, message: &str) {
        self.send(Level::Notice, message);
    }

    fn warning(&self, message: &str) {
        self.send(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.send(Level::Error, message);
    }

    fn critical(&self, message: &str) {
        self.send(Level::Critical, message);
    }

    fn name(&self) -> &str {
        "channel"
    }
}
