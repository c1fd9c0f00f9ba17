#![cfg(feature = "cli")]

use rainbow::strip_escapes;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const KNOWN: &str =
    "\x1b[38;5;154m1\x1b[0m\x1b[38;5;154m1\x1b[0m\x1b[38;5;154m✂\x1b[0m\x1b[38;5;154m1\x1b[0m\n";

/// Runs the binary against an isolated config path so the user's own file never leaks in.
fn run(config: &Path, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rainbow"))
        .arg("--config")
        .arg(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run rainbow");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("failed to feed stdin");
    child.wait_with_output().expect("failed to wait for rainbow")
}

fn no_config(tmp_dir: &TempDir) -> PathBuf {
    tmp_dir.path().join("absent.toml")
}

#[test]
fn paints_arguments_joined_with_newline() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(&no_config(&tmp_dir), &["RjAuFZXfyIkaE5Ox", "LitwdlBD6E0GL4Y6p"], b"");
    assert!(output.status.success());
    assert_eq!(
        strip_escapes(&output.stdout),
        b"RjAuFZXfyIkaE5Ox LitwdlBD6E0GL4Y6p\n"
    );
}

#[test]
fn paints_stdin_without_arguments() {
    let tmp_dir = TempDir::new().unwrap();
    let input = b"RjAuFZXfyIkaE5Ox\tLitwdlBD6E0GL4Y6p\nsecond \x1b[1mline\x1b[0m";
    let output = run(&no_config(&tmp_dir), &[], input);
    assert!(output.status.success());
    assert_eq!(
        strip_escapes(&output.stdout),
        b"RjAuFZXfyIkaE5Ox        LitwdlBD6E0GL4Y6p\nsecond line"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn seed_flag_gives_exact_output() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(&no_config(&tmp_dir), &["--seed", "1", "11✂1"], b"");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), KNOWN);
}

#[test]
fn seed_from_config_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("rainbow.toml");
    fs::write(&path, "[paint]\nseed = 1\n").unwrap();

    let output = run(&path, &["11✂1"], b"");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), KNOWN);
}

#[test]
fn flags_override_config_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("rainbow.toml");
    fs::write(&path, "[paint]\nseed = 200\nspread = 0.5\n").unwrap();

    let output = run(&path, &["-s", "1", "-p", "3", "11✂1"], b"");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), KNOWN);
}

#[test]
fn invalid_spread_exits_failure() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(&no_config(&tmp_dir), &["--spread", "0", "text"], b"");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid gradient"));
}

#[test]
fn broken_config_exits_failure() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("rainbow.toml");
    fs::write(&path, "[paint\n").unwrap();

    let output = run(&path, &["text"], b"");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading config"));
}

#[test]
fn debug_level_reports_seed_on_stderr() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(
        &no_config(&tmp_dir),
        &["--log-level", "debug", "--seed", "9", "hi"],
        b"",
    );
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("seed=9"));
    assert_eq!(strip_escapes(&output.stdout), b"hi\n");
}

#[test]
fn version_prints_name() {
    let output = Command::new(env!("CARGO_BIN_EXE_rainbow"))
        .arg("--version")
        .output()
        .expect("failed to run rainbow");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("rainbow "));
}
