use assert_cmd::Command;
use dbconnector::prelude::*;

#[test]
fn demo_reports_failure_and_exits_cleanly() {
    let output = Command::cargo_bin("dbconnector").unwrap().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "{:?}", lines);
    assert!(lines[0].starts_with("Error connecting to the database: "));
}

#[test]
fn demo_respects_rust_log() {
    let output = Command::cargo_bin("dbconnector").unwrap().env("RUST_LOG", "off").output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unreachable_host_is_absent() {
    let conn = connect("nonexistent.invalid", "root", "wrong", "test").unwrap();
    assert!(conn.is_none());
}

#[test]
fn parameters_port_is_fixed() {
    let params = ConnectionParameters::new("localhost", "root", "", "test");
    assert_eq!(params.port(), dbconnector::DEFAULT_PORT);
    assert_eq!(params.port(), 3306);
    assert!(connect_with(&ConnectionParameters { host: "nonexistent.invalid".into(), ..params }).unwrap().is_none());
}
