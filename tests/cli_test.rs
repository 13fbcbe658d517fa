#![cfg(feature = "git")]

mod common;

use dev_version::version_file::read_version_file;
use std::process::Command;

fn dev_version() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dev-version"))
}

#[test]
fn test_cli_help() {
    let output = dev_version()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("dev-version"));
    assert!(stdout.contains("weekly and release tags"));
}

#[test]
fn test_cli_prints_version_of_ref() {
    let fixture = common::build_reference_repo();

    let output = dev_version()
        .arg("--repo")
        .arg(fixture.dir.path())
        .args(["--quiet", "v3.0.0"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "3.0.0a20220903\n");
}

#[test]
fn test_cli_defaults_to_head() {
    let fixture = common::build_reference_repo();

    let output = dev_version()
        .arg("--repo")
        .arg(fixture.dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "4.0.0a20221001\n");
}

#[test]
fn test_cli_quiet_keeps_stderr_empty() {
    let fixture = common::build_reference_repo();

    let output = dev_version()
        .arg("--repo")
        .arg(fixture.dir.path())
        .args(["--quiet", "v1.0.0"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.0.0a00000001\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_writes_version_file() {
    let fixture = common::build_reference_repo();

    let output = dev_version()
        .arg("--repo")
        .arg(fixture.dir.path())
        .args(["--write-to", "python/pkg/version.py", "w.2022.05"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let written = read_version_file(&fixture.dir.path().join("python/pkg/version.py")).unwrap();
    assert_eq!(written.as_deref(), Some("2.0.0a20220600"));
}

#[test]
fn test_cli_reports_unknown_ref() {
    let fixture = common::build_reference_repo();

    let output = dev_version()
        .arg("--repo")
        .arg(fixture.dir.path())
        .arg("does-not-exist")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does-not-exist"));
}
