use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

const DEMO_ON_TERMINAL: [&str; 3] = ["--demo", "--log", "terminal"];

fn run_admin(args: &[&str], input: &str) -> (String, String, bool) {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("absent.ron");
    let mut child = Command::new(env!("CARGO_BIN_EXE_cardfill-admin"))
        .current_dir(temp.path())
        .arg("--settings")
        .arg(&settings)
        .args(DEMO_ON_TERMINAL)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
        output.status.success(),
    )
}

#[test]
fn terminal_log_lines_stay_off_stdout() {
    let (stdout, stderr, ok) = run_admin(&[], "quit\n");

    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("== User management =="));
    assert!(!stdout.contains("Starting console"), "stdout: {stdout}");
    assert!(stderr.contains("Starting console on screen users"));
}

#[test]
fn flags_override_the_defaults() {
    let (stdout, stderr, ok) = run_admin(&["--screen", "requests", "--page-size", "50"], "quit\n");

    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("== Card edit requests =="));
    assert!(stdout.contains("Page 1 of 1 (42 records)   < ---- | ---- >"));
}

#[test]
fn zero_page_size_flag_fails_to_start() {
    let (_, stderr, ok) = run_admin(&["--page-size", "0"], "");

    assert!(!ok);
    assert!(stderr.contains("page size"), "stderr: {stderr}");
}
