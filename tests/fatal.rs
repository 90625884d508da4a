// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fatal calls end the process, so each case re-runs this test binary filtered to a single
//! child test and inspects its exit status and stderr.

use std::process::{Command, Output};

const CHILD_ENV: &str = "LEVELOG_FATAL_CHILD";

fn run_child(name: &str) -> Output {
    let exe = std::env::current_exe().unwrap();
    Command::new(exe)
        .args([name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, name)
        .output()
        .unwrap()
}

fn is_child(name: &str) -> bool {
    std::env::var(CHILD_ENV).is_ok_and(|v| v == name)
}

#[test]
fn child_fatal() {
    if !is_child("child_fatal") {
        return;
    }
    let logger = levelog::Logger::new(levelog::Level::INFO);
    logger.fatal(&[&"out of", &"memory"]);
}

#[test]
fn child_fatalf_suppressed() {
    if !is_child("child_fatalf_suppressed") {
        return;
    }
    // below even the fatal level, so nothing is written
    let logger = levelog::Logger::new(levelog::Level::new(-10));
    logger.fatalf(format_args!("never shown"));
}

#[test]
fn child_fatalf_empty() {
    if !is_child("child_fatalf_empty") {
        return;
    }
    levelog::fatalf!("{}", "");
}

#[test]
fn child_fatal_macro() {
    if !is_child("child_fatal_macro") {
        return;
    }
    levelog::fatal!("config", "missing");
}

#[test]
fn fatal_writes_then_exits() {
    let out = run_child("child_fatal");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("fatal.rs:"), "{stderr}");
    assert!(stderr.contains("] fatal: out of memory\n"), "{stderr}");
}

#[test]
fn fatal_exits_even_when_gated() {
    let out = run_child("child_fatalf_suppressed");
    assert_eq!(out.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&out.stderr).contains("never shown"));
}

#[test]
fn fatal_exits_on_empty_format() {
    let out = run_child("child_fatalf_empty");
    assert_eq!(out.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&out.stderr).contains("] fatal: "));
}

#[test]
fn fatal_macro_uses_default_logger() {
    let out = run_child("child_fatal_macro");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("] fatal: config missing\n"));
}
