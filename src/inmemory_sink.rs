// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! [`InMemorySink`] collects the bytes a [`Logger`](crate::Logger) writes instead of sending them
//! to stderr.  It is useful for:
//!
//! - Unit testing code that logs
//! - Capturing output where stderr is redirected or unavailable
//! - Programmatically examining log output
//!
//! Clones share one buffer, so a test can hand one clone to the logger and keep another to read
//! from.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// A cloneable byte sink backed by shared memory.
///
/// # Example
///
/// ```rust
/// use levelog::{InMemorySink, Level, Logger};
///
/// let sink = InMemorySink::new();
/// let logger = Logger::with_output(Level::INFO, sink.clone());
///
/// logger.warningf(format_args!("disk {}% full", 93));
///
/// let logs = sink.drain_logs();
/// assert!(logs.ends_with("] warning: disk 93% full\n"));
/// assert_eq!(sink.drain_logs(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived for diagnostic purposes
// - Clone: Derived - clones share the buffer, which is the point
// - Default: Derived - empty buffer
// - PartialEq/Eq: NOT implemented - unclear whether we mean buffer identity or contents
// - Write: the sink interface
// - Send/Sync: Automatically implemented via Arc<Mutex<_>>

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        let mut buf = self.buf.lock();
        let result = String::from_utf8_lossy(&buf).into_owned();
        buf.clear();
        result
    }

    /// Returns everything written so far, leaving the buffer intact.
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl Write for InMemorySink {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
