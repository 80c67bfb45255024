//! CLI integration tests

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn post_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn prints_a_treeviz_by_default() {
    let file = post_file("hello *world*\n- item\n");
    Command::cargo_bin("quill")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("⧉ document"))
        .stdout(predicate::str::contains("¶"))
        .stdout(predicate::str::contains("☰ list (1 items)"));
}

#[test]
fn sexpr_format_prints_the_tree() {
    let file = post_file("hello *there*\n");
    Command::cargo_bin("quill")
        .unwrap()
        .arg(file.path())
        .args(["--format", "sexpr"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"(paragraph "hello " (italic "there"))"#,
        ));
}

#[test]
fn json_format_is_machine_readable() {
    let file = post_file("```c\nmain();\n```\n");
    Command::cargo_bin("quill")
        .unwrap()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Code\""))
        .stdout(predicate::str::contains("main();"));
}

#[test]
fn reads_from_stdin_with_a_dash() {
    Command::cargo_bin("quill")
        .unwrap()
        .arg("-")
        .args(["--format", "sexpr"])
        .write_stdin("*stdin works*\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"(italic "stdin works")"#));
}

#[test]
fn contradictory_markup_exits_nonzero() {
    let file = post_file("*a***b\n");
    Command::cargo_bin("quill")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot close"));
}

#[test]
fn unknown_format_exits_nonzero() {
    let file = post_file("text\n");
    Command::cargo_bin("quill")
        .unwrap()
        .arg(file.path())
        .args(["--format", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn missing_file_exits_nonzero() {
    Command::cargo_bin("quill")
        .unwrap()
        .arg("definitely/not/a/file.quill")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}
