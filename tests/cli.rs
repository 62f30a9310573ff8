use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
    time::{SystemTime, UNIX_EPOCH},
};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos());
        let path =
            std::env::temp_dir().join(format!("shuntcalc_cli_{tag}_{}_{ts}", std::process::id()));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_shuntcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shuntcalc")).args(args)
                                                 .env_remove("RUST_LOG")
                                                 .output()
                                                 .expect("run shuntcalc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn evaluates_a_single_expression() {
    let output = run_shuntcalc(&["((15+2+3)*5-50)*3"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout(&output), "150\n");
}

#[test]
fn prints_postfix_before_the_result() {
    let output = run_shuntcalc(&["--postfix", "8 - 4 - 2"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout(&output), "8 4 - 2 -\n2\n");
}

#[test]
fn reports_errors_on_stderr_with_failure_status() {
    let output = run_shuntcalc(&["1+2&3"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'&'"), "unexpected stderr: {stderr}");
}

#[test]
fn leading_minus_is_an_expression_not_a_flag() {
    let output = run_shuntcalc(&["-1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("requires 2 operand(s)"), "unexpected stderr: {stderr}");
}

#[test]
fn evaluates_every_line_of_a_file() {
    let output = run_shuntcalc(&["--file", "tests/example.calc"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout(&output), "14\n2\n150\n10\n");
}

#[test]
fn file_with_a_bad_line_keeps_going_and_fails() {
    let dir = TestDir::new("bad_line");
    let source = dir.path.join("input.calc");
    fs::write(&source, "(1+2\n1+1\n").expect("write input file");

    let output = run_shuntcalc(&["-f", source.to_str().expect("utf-8 temp path")]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "2\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unmatched parenthesis"), "unexpected stderr: {stderr}");
}

#[test]
fn missing_file_is_reported() {
    let dir = TestDir::new("missing");
    let missing = dir.path.join("nope.calc");

    let output = run_shuntcalc(&["--file", missing.to_str().expect("utf-8 temp path")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read the input file"), "unexpected stderr: {stderr}");
}
