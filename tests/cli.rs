// Argument handling and the tty guard, driven against the compiled binary.
// The full TUI needs a terminal, so a piped child can only reach the code
// in front of the event loop.

use std::process::Command;

fn typr() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin("typr"))
}

#[test]
fn help_lists_the_round_flags() {
    let output = typr().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--number-of-secs"));
    assert!(stdout.contains("--number-of-words"));
}

#[test]
fn version_prints_the_crate_name() {
    let output = typr().arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("typr"));
}

#[test]
fn seconds_flag_is_range_checked() {
    let output = typr().args(["--number-of-secs", "99"]).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("5..=60"));
}

#[test]
fn refuses_to_run_without_a_tty() {
    let output = typr().output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("stdin must be a tty"));
}
