// End-to-end checks against the built binary.
//
// Every invocation prints the startup banner on stdout first, so output
// assertions match on the tail of stdout.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gatocli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gatocli"))
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    gatocli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("coinflip [times]"));
}

#[test]
fn banner_is_printed_before_every_command() {
    gatocli()
        .args(["greet", "Sam"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  ____"))
        .stdout(predicate::str::contains("|_____|"));
}

#[test]
fn help_flags_print_usage() {
    for flag in ["--help", "-h"] {
        gatocli()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("greet [name]"))
            .stdout(predicate::str::contains("count <sentence> <character>"));
    }
}

#[test]
fn version_flags_print_version() {
    for flag in ["--version", "-v"] {
        gatocli()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "version {}",
                env!("CARGO_PKG_VERSION")
            )));
    }
}

#[test]
fn unknown_command_fails_with_usage() {
    gatocli()
        .arg("dance")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: unknown command 'dance'"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn greet_defaults_to_there() {
    gatocli()
        .arg("greet")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Hello, there!\n"));

    gatocli()
        .args(["greet", "Sam"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Hello, Sam!\n"));
}

#[test]
fn repeat_prints_numbered_lines() {
    let output = gatocli().args(["repeat", "4"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout
        .lines()
        .filter(|line| line.contains("This is notification"))
        .collect();
    assert_eq!(
        lines,
        [
            "1: This is notification #1",
            "2: This is notification #2",
            "3: This is notification #3",
            "4: This is notification #4",
        ]
    );
}

#[test]
fn repeat_without_count_fails() {
    gatocli()
        .arg("repeat")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("needs a repetition count"));
}

#[test]
fn hello_rejects_zero() {
    gatocli()
        .args(["hello", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be a positive integer"));
}

#[test]
fn add_sums_operands() {
    gatocli()
        .args(["add", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("The result of the operation was: 5\n"));
}

#[test]
fn add_rejects_negative_operand() {
    gatocli()
        .args(["add", "-1", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The result").not())
        .stderr(predicate::str::contains("got '-1'"));
}

#[test]
fn add_needs_two_operands() {
    gatocli()
        .args(["add", "7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'add' needs two numbers"));
}

#[test]
fn banner_missing_file_is_reported_but_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    gatocli()
        .current_dir(temp_dir.path())
        .args(["banner", "missing.txt"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("___|\n                                      \n\n"))
        .stderr(
            predicate::str::is_match(r"\Aerror: unable to open 'missing.txt': [^\n]+\n\z")
                .unwrap(),
        );
}

#[test]
fn banner_prints_latin1_file_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("latin1.txt"), b"caf\xe9\n").unwrap();

    let output = gatocli()
        .current_dir(temp_dir.path())
        .args(["banner", "latin1.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.ends_with(b"\n\ncaf\xe9\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn banner_reads_default_file_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("banner.txt"), "~~ welcome ~~\n").unwrap();

    gatocli()
        .current_dir(temp_dir.path())
        .arg("banner")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("~~ welcome ~~\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn echo_joins_words_without_trailing_space() {
    gatocli()
        .args(["echo", "a", "b", "c"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\na b c\n"));
}

#[test]
fn echo_without_words_fails() {
    gatocli().arg("echo").assert().code(1);
}

#[test]
fn coinflip_prints_one_face_per_line() {
    let output = gatocli().args(["coinflip", "5"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let faces = stdout
        .lines()
        .filter(|line| *line == "Heads" || *line == "Tails")
        .count();
    assert_eq!(faces, 5);
}

#[test]
fn coinflip_bad_count_flips_once() {
    let output = gatocli().args(["coinflip", "lots"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let faces = stdout
        .lines()
        .filter(|line| *line == "Heads" || *line == "Tails")
        .count();
    assert_eq!(faces, 1);
}

#[test]
fn count_tallies_character() {
    gatocli()
        .args(["count", "hello", "l"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n2\n"));
}

#[test]
fn count_without_character_fails() {
    gatocli()
        .args(["count", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'count' needs a sentence and a character"));
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    gatocli()
        .args(["--debug", "echo", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nquiet\n"))
        .stdout(predicate::str::contains("DEBUG").not());
}

#[test]
fn repeated_debug_flag_is_accepted() {
    gatocli()
        .args(["--debug", "--debug", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Hello, there!\n"));
}

#[test]
fn malformed_global_option_exits_with_one() {
    gatocli()
        .args(["--debug=yes", "greet"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("  ____"))
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::starts_with("error: "));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_echoed_lossily() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    gatocli()
        .arg("echo")
        .arg(OsString::from_vec(vec![b'a', 0xff, b'b']))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  ____"))
        .stdout(predicate::str::ends_with("\na\u{FFFD}b\n"));
}
