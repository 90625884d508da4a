// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros over the default logger.
//!
//! For each severity there is a print-style macro that joins its arguments with spaces and a
//! printf-style macro (suffixed `f`) that takes a format string:
//!
//! ```rust
//! let port = 8080;
//! levelog::info!("listening on", port);
//! levelog::warningf!("port {port} is unprivileged? {}", port > 1024);
//! ```
//!
//! The header names the line the macro was invoked on.

#[doc(hidden)]
#[macro_export]
macro_rules! __print_args {
    ($func:ident $(, $arg:expr)* $(,)?) => {
        $crate::$func(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs at [`Level::VVVDEBUG`](crate::Level::VVVDEBUG); arguments are joined with spaces.
#[macro_export]
macro_rules! vvvdebug {
    ($($arg:expr),* $(,)?) => { $crate::__print_args!(vvvdebug $(, $arg)*) };
}

/// Logs at [`Level::VVVDEBUG`](crate::Level::VVVDEBUG) with a format string.
#[macro_export]
macro_rules! vvvdebugf {
    ($($arg:tt)+) => { $crate::vvvdebugf(::std::format_args!($($arg)+)) };
}

/// Logs at [`Level::VVDEBUG`](crate::Level::VVDEBUG); arguments are joined with spaces.
#[macro_export]
macro_rules! vvdebug {
    ($($arg:expr),* $(,)?) => { $crate::__print_args!(vvdebug $(, $arg)*) };
}

/// Logs at [`Level::VVDEBUG`](crate::Level::VVDEBUG) with a format string.
#[macro_export]
macro_rules! vvdebugf {
    ($($arg:tt)+) => { $crate::vvdebugf(::std::format_args!($($arg)+)) };
}

/// Logs at [`Level::VDEBUG`](crate::Level::VDEBUG); arguments are joined with spaces.
#[macro_export]
macro_rules! vdebug {
    ($($arg:expr),* $(,)?) => { $crate::__print_args!(vdebug $(, $arg)*) };
}

/// Logs at [`Level::VDEBUG`](crate::Level::VDEBUG) with a format string.
#[macro_export]
macro_rules! vdebugf {
    ($($arg:tt)+) => { $crate::vdebugf(::std::format_args!($($arg)+)) };
}

/// Logs at [`Level::DEBUG`](crate::Level::DEBUG); arguments are joined with spaces.
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => { $crate::__print_args!(debug $(, $arg)*) };
}

/// Logs at [`Level::DEBUG`](crate::Level::DEBUG) with a format string.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => { $crate::debugf(::std::format_args!($($arg)+)) };
}

/// Logs at [`Level::INFO`](crate::Level::INFO); arguments are joined with spaces.
#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => { $crate::__print_args!(info $(, $arg)*) };
}

/// Logs at [`Level::INFO`](crate::Level::INFO) with a format string.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => { $crate::infof(::std::format_args!($($arg)+)) };
}

/// Logs at [`Level::WARNING`](crate::Level::WARNING); arguments are joined with spaces.
#[macro_export]
macro_rules! warning {
    ($($arg:expr),* $(,)?) => { $crate::__print_args!(warning $(, $arg)*) };
}

/// Logs at [`Level::WARNING`](crate::Level::WARNING) with a format string.
#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => { $crate::warningf(::std::format_args!($($arg)+)) };
}

/// Logs at [`Level::ERROR`](crate::Level::ERROR); arguments are joined with spaces.
#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => { $crate::__print_args!(error $(, $arg)*) };
}

/// Logs at [`Level::ERROR`](crate::Level::ERROR) with a format string.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => { $crate::errorf(::std::format_args!($($arg)+)) };
}

/// Logs at [`Level::FATAL`](crate::Level::FATAL), then exits the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => { $crate::__print_args!(fatal $(, $arg)*) };
}

/// Logs at [`Level::FATAL`](crate::Level::FATAL) with a format string, then exits the process
/// with status 1.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => { $crate::fatalf(::std::format_args!($($arg)+)) };
}
