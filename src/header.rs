// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message headers.
//!
//! Every written message is prefixed with a header of the form
//!
//! ```text
//! YY/MM/DD HH:MM:SS.UUUUUU file:line] LEVEL:
//! ```
//!
//! where `file` is the last path segment of the source file that made the public logging call.

use crate::Level;
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::panic::Location;

/// The source location a message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Used when the location has no file name.
    pub const UNKNOWN: CallSite = CallSite {
        file: "???",
        line: 0,
    };

    /// The location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        let file = base_name(location.file());
        if file.is_empty() {
            return Self::UNKNOWN;
        }
        CallSite {
            file,
            line: location.line(),
        }
    }

    /// The file name, without directories.
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Builds the header for a message at `level` from `site`, stamped with `at`.
pub(crate) fn format_header<Tz: TimeZone>(
    level: Level,
    site: &CallSite,
    at: &DateTime<Tz>,
) -> String {
    // leap seconds report nanosecond() >= 1e9
    let micros = (at.nanosecond() / 1_000).min(999_999);
    format!(
        "{:02}/{:02}/{:02} {:02}:{:02}:{:02}.{:06} {}:{}] {}: ",
        at.year().rem_euclid(100),
        at.month(),
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
        micros,
        site.file(),
        site.line(),
        level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn at(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32, micro: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn header_layout() {
        let site = CallSite {
            file: "main.rs",
            line: 17,
        };
        let header = format_header(Level::WARNING, &site, &at(2024, 3, 9, 7, 5, 3, 42));
        assert_eq!(header, "24/03/09 07:05:03.000042 main.rs:17] warning: ");
    }

    #[test]
    fn year_is_two_digits() {
        let last_micro = at(1999, 12, 31, 23, 59, 59, 999_999);
        let header = format_header(Level::DEBUG, &CallSite::UNKNOWN, &last_micro);
        assert_eq!(header, "99/12/31 23:59:59.999999 ???:0] debug0: ");
        let century = at(2100, 1, 1, 0, 0, 0, 0);
        let header = format_header(Level::INFO, &CallSite::UNKNOWN, &century);
        assert!(header.starts_with("00/01/01 00:00:00.000000 "));
    }

    #[test]
    fn out_of_table_level_in_header() {
        let noon = at(2020, 6, 1, 12, 0, 0, 1);
        let header = format_header(Level::new(9), &CallSite::UNKNOWN, &noon);
        assert!(header.ends_with("???:0] 9: "));
    }

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("src/header.rs"), "header.rs");
        assert_eq!(base_name("/a/b/c/lib.rs"), "lib.rs");
        assert_eq!(base_name("lib.rs"), "lib.rs");
        assert_eq!(base_name("dir/"), "");
    }

    #[test]
    fn caller_reports_this_file() {
        let site = CallSite::caller();
        let line = line!() - 1;
        assert_eq!(site.file(), "header.rs");
        assert_eq!(site.line(), line);
    }
}
