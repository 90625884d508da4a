// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Logger`] type.
//!
//! A logger holds a threshold and a sink.  Each severity has two entry points:
//!
//! * `info(&[..])` and friends join their arguments with single spaces, like `print`.
//! * `infof(format_args!(..))` and friends substitute into a format string, like `printf`.
//!   A message that formats to nothing is dropped without a header.
//!
//! Either way the message gets exactly one trailing newline, is checked against the threshold,
//! prefixed with a [header](crate::header) and written to the sink.

use crate::Level;
use crate::header::{CallSite, format_header};
use parking_lot::Mutex;
use std::fmt::{self, Display, Write as _};
use std::io::Write;
use std::sync::atomic::{AtomicI32, Ordering};

type Sink = Box<dyn Write + Send>;

/**
A leveled logger.

Messages at or above the threshold in urgency (`level <= threshold`) are written; the rest are
discarded before any formatting happens.

The threshold is a plain word read without synchronization, so a concurrent [Self::set_level]
may not be observed by an emit already in flight.  The sink sits behind a lock that is held only
while one header and its message are written, so messages from different threads never
interleave.

```rust
use levelog::{InMemorySink, Level, Logger};

let sink = InMemorySink::new();
let logger = Logger::with_output(Level::INFO, sink.clone());

logger.info(&[&"listening on", &8080]);
logger.debug(&[&"not shown"]);

let logs = sink.drain_logs();
assert!(logs.ends_with("] info: listening on 8080\n"));
assert_eq!(logs.lines().count(), 1);
```
*/
pub struct Logger {
    threshold: AtomicI32,
    sink: Mutex<Sink>,
}

macro_rules! severity_methods {
    ($($level:ident => $print:ident, $printf:ident;)*) => {
        $(
            #[doc = concat!("Logs at [`Level::", stringify!($level), "`]; arguments are joined with spaces.")]
            #[track_caller]
            pub fn $print(&self, args: &[&dyn Display]) {
                self.print(Level::$level, args);
            }

            #[doc = concat!("Logs at [`Level::", stringify!($level), "`]; arguments are substituted into a format string.")]
            #[track_caller]
            pub fn $printf(&self, args: fmt::Arguments<'_>) {
                self.printf(Level::$level, args);
            }
        )*
    };
}

impl Logger {
    /// Creates a logger writing to standard error.
    pub fn new(threshold: Level) -> Self {
        Self::with_output(threshold, std::io::stderr())
    }

    /// Creates a logger writing to `sink`.
    pub fn with_output<W: Write + Send + 'static>(threshold: Level, sink: W) -> Self {
        Logger {
            threshold: AtomicI32::new(threshold.value()),
            sink: Mutex::new(Box::new(sink) as Sink),
        }
    }

    /// Replaces the sink, returning the previous one.
    ///
    /// Waits for any write in progress to finish.
    pub fn set_output<W: Write + Send + 'static>(&self, sink: W) -> Box<dyn Write + Send> {
        std::mem::replace(&mut *self.sink.lock(), Box::new(sink))
    }

    /// Sets the threshold.  Messages at or above this level in urgency are written.
    pub fn set_level(&self, threshold: Level) {
        self.threshold.store(threshold.value(), Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::new(self.threshold.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would currently be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level()
    }

    severity_methods! {
        VVVDEBUG => vvvdebug, vvvdebugf;
        VVDEBUG => vvdebug, vvdebugf;
        VDEBUG => vdebug, vdebugf;
        DEBUG => debug, debugf;
        INFO => info, infof;
        WARNING => warning, warningf;
        ERROR => error, errorf;
    }

    /// Logs at [`Level::FATAL`], then exits the process with status 1.
    ///
    /// Exits even when the threshold would discard the message.
    #[track_caller]
    pub fn fatal(&self, args: &[&dyn Display]) -> ! {
        self.print(Level::FATAL, args);
        self.die()
    }

    /// Logs at [`Level::FATAL`] with a format string, then exits the process with status 1.
    ///
    /// Exits even when the message is empty or the threshold would discard it.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.printf(Level::FATAL, args);
        self.die()
    }

    #[track_caller]
    fn print(&self, level: Level, args: &[&dyn Display]) {
        if !self.enabled(level) {
            return;
        }
        let mut message = String::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                message.push(' ');
            }
            // a failing Display impl leaves whatever it wrote
            let _ = write!(message, "{arg}");
        }
        if !message.ends_with('\n') {
            message.push('\n');
        }
        self.emit(level, message.as_bytes());
    }

    #[track_caller]
    fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let mut message = String::new();
        let _ = message.write_fmt(args);
        if message.is_empty() {
            return;
        }
        if !message.ends_with('\n') {
            message.push('\n');
        }
        self.emit(level, message.as_bytes());
    }

    #[track_caller]
    fn emit(&self, level: Level, message: &[u8]) {
        if !self.enabled(level) {
            return;
        }
        let header = format_header(level, &CallSite::caller(), &chrono::Local::now());

        let mut sink = self.sink.lock();
        // best effort: a broken sink must not disturb the caller
        let _ = sink.write_all(header.as_bytes());
        let _ = sink.write_all(message);
    }

    fn die(&self) -> ! {
        let _ = self.sink.lock().flush();
        std::process::exit(1)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.level())
            .finish_non_exhaustive()
    }
}

/*
Boilerplate notes.

# Logger

Clone would mean two loggers sharing one sink lock, or two locks racing on one sink.  Neither is obvious, so no.
PartialEq/Eq/Hash: there is no meaningful data equality between two sinks.
Default: Logger::new(Level::INFO) is what the global logger uses, but a caller constructing one should pick a threshold.
Display makes no sense.
Debug is handwritten since the sink is a trait object.
Send/Sync are automatic and required for the global logger.
*/
