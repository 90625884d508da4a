// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels.
//!
//! A [`Level`] is a small signed code.  More urgent levels have smaller values, so the derived
//! ordering puts [`Level::FATAL`] first and [`Level::VVVDEBUG`] last.  A logger passes a message
//! when `message_level <= threshold`.
//!
//! Each level in the fixed table has a canonical text token, used both in log headers and in
//! serialized payloads:
//!
//! | Level      | Value | Token      | Also accepted |
//! |------------|-------|------------|---------------|
//! | `FATAL`    | -4    | `fatal`    |               |
//! | `ERROR`    | -3    | `error`    |               |
//! | `WARNING`  | -2    | `warning`  |               |
//! | `INFO`     | -1    | `info`     |               |
//! | `DEBUG`    | 0     | `debug0`   | `debug`       |
//! | `VDEBUG`   | 1     | `debug1`   | `vdebug`      |
//! | `VVDEBUG`  | 2     | `debug2`   | `vvdebug`     |
//! | `VVVDEBUG` | 3     | `debug3`   | `vvvdebug`    |

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The severity of a log message.
///
/// Two levels with the same value are the same level; there is no other identity.
///
/// ```
/// use levelog::Level;
///
/// assert!(Level::ERROR < Level::INFO);
/// assert_eq!(Level::VDEBUG.to_string(), "debug1");
/// assert_eq!("vdebug".parse::<Level>().unwrap(), Level::VDEBUG);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    /// Logged, then the process exits with status 1.
    pub const FATAL: Level = Level(-4);
    pub const ERROR: Level = Level(-3);
    pub const WARNING: Level = Level(-2);
    pub const INFO: Level = Level(-1);
    pub const DEBUG: Level = Level(0);
    pub const VDEBUG: Level = Level(1);
    pub const VVDEBUG: Level = Level(2);
    pub const VVVDEBUG: Level = Level(3);

    /// Every level in the fixed table, most urgent first.
    pub const ALL: [Level; 8] = [
        Level::FATAL,
        Level::ERROR,
        Level::WARNING,
        Level::INFO,
        Level::DEBUG,
        Level::VDEBUG,
        Level::VVDEBUG,
        Level::VVVDEBUG,
    ];

    /// Wraps a raw severity code.  Codes outside the table are allowed; they display as numerals.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The canonical token, or `None` for a code outside the table.
    pub const fn as_str(self) -> Option<&'static str> {
        match self.0 {
            -4 => Some("fatal"),
            -3 => Some("error"),
            -2 => Some("warning"),
            -1 => Some("info"),
            0 => Some("debug0"),
            1 => Some("debug1"),
            2 => Some("debug2"),
            3 => Some("debug3"),
            _ => None,
        }
    }
}

/// Returned when a token names no level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level {token:?}")]
pub struct ParseLevelError {
    token: String,
}

impl ParseLevelError {
    /// The rejected input (lossily decoded if it was not UTF-8).
    pub fn token(&self) -> &str {
        &self.token
    }
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Copy/Clone/Eq/Ord/Hash: derived, all follow the numeric code
// - Default: NOT implemented - no level is an obvious zero value for a threshold
// - Display/FromStr: the token codec
// - From<Level> for i32: exposes the code
// - TryFrom<&str>/TryFrom<&[u8]>: same parser as FromStr

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.as_str() {
            Some(token) => f.write_str(token),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fatal" => Ok(Level::FATAL),
            "error" => Ok(Level::ERROR),
            "warning" => Ok(Level::WARNING),
            "info" => Ok(Level::INFO),
            "debug0" | "debug" => Ok(Level::DEBUG),
            "debug1" | "vdebug" => Ok(Level::VDEBUG),
            "debug2" | "vvdebug" => Ok(Level::VVDEBUG),
            "debug3" | "vvvdebug" => Ok(Level::VVVDEBUG),
            _ => Err(ParseLevelError {
                token: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = ParseLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&[u8]> for Level {
    type Error = ParseLevelError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match std::str::from_utf8(value) {
            Ok(s) => s.parse(),
            Err(_) => Err(ParseLevelError {
                token: String::from_utf8_lossy(value).into_owned(),
            }),
        }
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Level;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Level {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct LevelVisitor;

    impl Visitor<'_> for LevelVisitor {
        type Value = Level;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a log level name such as \"info\" or \"debug1\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Level, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Level, E> {
            Level::try_from(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Level {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(LevelVisitor)
        }
    }
}
