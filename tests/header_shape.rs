// SPDX-License-Identifier: MIT OR Apache-2.0

use levelog::{InMemorySink, Level, Logger};
use regex::Regex;

fn header_pattern(token: &str) -> Regex {
    Regex::new(&format!(
        r"^\d{{2}}/\d{{2}}/\d{{2}} \d{{2}}:\d{{2}}:\d{{2}}\.\d{{6}} [^/\s]+:\d+\] {token}: "
    ))
    .unwrap()
}

#[test]
fn header_matches_fixed_layout() {
    let sink = InMemorySink::new();
    let logger = Logger::with_output(Level::VVVDEBUG, sink.clone());

    logger.error(&[&"e"]);
    logger.warningf(format_args!("w"));
    logger.info(&[&"i"]);
    logger.debugf(format_args!("d"));
    logger.vdebug(&[&"v"]);
    logger.vvdebugf(format_args!("vv"));
    logger.vvvdebug(&[&"vvv"]);

    let logs = sink.drain_logs();
    let lines: Vec<&str> = logs.lines().collect();
    let tokens = ["error", "warning", "info", "debug0", "debug1", "debug2", "debug3"];
    assert_eq!(lines.len(), tokens.len(), "{logs}");
    for (line, token) in lines.iter().zip(tokens) {
        assert!(header_pattern(token).is_match(line), "{line:?} vs {token}");
    }
}

#[test]
fn header_names_caller_line() {
    let sink = InMemorySink::new();
    let logger = Logger::with_output(Level::INFO, sink.clone());

    logger.warning(&[&"from the test"]);
    let line = line!() - 1;

    let logs = sink.drain_logs();
    let expected = format!(" header_shape.rs:{line}] warning: from the test\n");
    assert!(logs.ends_with(&expected), "{logs:?}");
    assert!(header_pattern("warning").is_match(&logs));
}

#[track_caller]
fn log_through_helper(logger: &Logger) {
    logger.infof(format_args!("via helper"));
}

#[test]
fn track_caller_helpers_are_skipped() {
    let sink = InMemorySink::new();
    let logger = Logger::with_output(Level::INFO, sink.clone());

    log_through_helper(&logger);
    let line = line!() - 1;

    assert!(sink.drain_logs().contains(&format!(" header_shape.rs:{line}] info: via helper")));
}
