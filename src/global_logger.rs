// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! The free functions in this module (re-exported at the crate root) forward to one shared
//! [`Logger`], created on first use with threshold [`Level::INFO`] and writing to stderr.
//!
//! ```
//! levelog::info(&[&"starting", &"worker"]);
//! levelog::debugf(format_args!("suppressed at the default threshold"));
//!
//! levelog::set_level(levelog::Level::DEBUG);
//! assert_eq!(levelog::level(), levelog::Level::DEBUG);
//! # levelog::set_level(levelog::Level::INFO);
//! ```
//!
//! # Thread Safety
//!
//! [`set_level`] is a relaxed store: last write wins, and an emit racing with it may see either
//! threshold.  Writes to the sink are serialized by the logger's own lock.

use crate::{Level, Logger};
use std::fmt::{self, Display};
use std::io::Write;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the shared default logger, creating it on first use.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::new(Level::INFO))
}

/// Sets the default logger's threshold.
pub fn set_level(threshold: Level) {
    default_logger().set_level(threshold);
}

/// The default logger's threshold.
pub fn level() -> Level {
    default_logger().level()
}

/// Replaces the default logger's sink, returning the previous one.
pub fn set_output<W: Write + Send + 'static>(sink: W) -> Box<dyn Write + Send> {
    default_logger().set_output(sink)
}

macro_rules! severity_functions {
    ($($level:ident => $print:ident, $printf:ident;)*) => {
        $(
            #[doc = concat!("Logs at [`Level::", stringify!($level), "`] on the default logger; arguments are joined with spaces.")]
            #[track_caller]
            pub fn $print(args: &[&dyn Display]) {
                default_logger().$print(args);
            }

            #[doc = concat!("Logs at [`Level::", stringify!($level), "`] on the default logger; arguments are substituted into a format string.")]
            #[track_caller]
            pub fn $printf(args: fmt::Arguments<'_>) {
                default_logger().$printf(args);
            }
        )*
    };
}

severity_functions! {
    VVVDEBUG => vvvdebug, vvvdebugf;
    VVDEBUG => vvdebug, vvdebugf;
    VDEBUG => vdebug, vdebugf;
    DEBUG => debug, debugf;
    INFO => info, infof;
    WARNING => warning, warningf;
    ERROR => error, errorf;
}

/// Logs at [`Level::FATAL`] on the default logger, then exits the process with status 1.
#[track_caller]
pub fn fatal(args: &[&dyn Display]) -> ! {
    default_logger().fatal(args)
}

/// Logs at [`Level::FATAL`] on the default logger with a format string, then exits the process
/// with status 1.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}
