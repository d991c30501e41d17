#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use mathclip_engine::{ConvertError, Converter, PandocConverter};
use tempfile::TempDir;

/// Drops an executable shell script into `dir` to stand in for the real
/// converter binary.
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn pipes_stdin_through_the_tool_and_captures_stdout() {
    let temp = TempDir::new().unwrap();
    // Ignores the format arguments and echoes stdin, like a converter that
    // changes nothing.
    let script = write_script(temp.path(), "fake-pandoc", "cat");

    let converter = PandocConverter::with_program(&script);
    let output = converter.convert("\\alpha + \\beta").unwrap();

    assert_eq!(output, "\\alpha + \\beta");
}

#[test]
fn nonzero_exit_surfaces_stderr() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        temp.path(),
        "fake-pandoc",
        "cat >/dev/null\necho 'unexpected end of input' >&2\nexit 64",
    );

    let converter = PandocConverter::with_program(&script);
    let err = converter.convert("\\frac{1}{").unwrap_err();

    match err {
        ConvertError::Failed { ref stderr } => {
            assert_eq!(stderr, "unexpected end of input");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(!err.is_fatal());
}

#[test]
fn silent_failure_still_reports_something() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), "fake-pandoc", "cat >/dev/null\nexit 3");

    let converter = PandocConverter::with_program(&script);
    let err = converter.convert("x^2").unwrap_err();

    match err {
        ConvertError::Failed { stderr } => {
            assert_eq!(stderr, "no diagnostics on stderr");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn missing_executable_is_fatal() {
    let temp = TempDir::new().unwrap();
    let converter = PandocConverter::with_program(temp.path().join("missing-tool"));

    let err = converter.convert("\\alpha").unwrap_err();

    assert!(matches!(err, ConvertError::MissingTool { .. }));
    assert!(err.is_fatal());
}

#[test]
fn probe_accepts_a_responding_tool() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), "fake-pandoc", "echo 'fake-pandoc 0.1'");

    let converter = PandocConverter::with_program(&script);
    assert!(converter.probe().is_ok());
}

#[test]
fn probe_reports_a_missing_tool_as_fatal() {
    let temp = TempDir::new().unwrap();
    let converter = PandocConverter::with_program(temp.path().join("missing-tool"));

    let err = converter.probe().unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn probe_flags_a_broken_tool() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), "fake-pandoc", "echo 'cannot start' >&2\nexit 1");

    let converter = PandocConverter::with_program(&script);
    let err = converter.probe().unwrap_err();

    match err {
        ConvertError::Failed { stderr } => assert_eq!(stderr, "cannot start"),
        other => panic!("expected Failed, got {other:?}"),
    }
}
