//! End-to-end tests for the `htmlclean` binary.
//!
//! These tests invoke the binary directly and check the files it writes,
//! its STDOUT and its exit status.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn htmlclean_cmd() -> Command {
    Command::cargo_bin("htmlclean").unwrap()
}

const PAGE: &str = "<div>\n  <p>Hello   <b>world</b></p>\n  <!-- note -->\n</div>\n";
const CLEANED: &str = "<div><p>Hello <b>world</b></p></div>";

#[test]
fn test_stdin_to_stdout() {
    htmlclean_cmd()
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout(CLEANED);
}

#[test]
fn test_files_get_min_siblings() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a/b.html").write_str(PAGE).unwrap();
    temp.child("a/c/d.html").write_str("<p> d </p>").unwrap();

    htmlclean_cmd()
        .current_dir(temp.path())
        .args(["a/b.html", "a/c/d.html"])
        .assert()
        .success();

    temp.child("a/b.min.html").assert(CLEANED);
    temp.child("a/c/d.min.html").assert("<p>d</p>");
}

#[test]
fn test_directory_into_output_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("site/x.html").write_str("<p> x </p>").unwrap();
    temp.child("site/y/z.html").write_str("<p> z </p>").unwrap();
    temp.child("out").create_dir_all().unwrap();

    htmlclean_cmd()
        .current_dir(temp.path())
        .args(["-i", "site", "-o", "out"])
        .assert()
        .success();

    temp.child("out/x.html").assert("<p>x</p>");
    temp.child("out/y").assert(predicate::path::is_dir());
    temp.child("out/y/z.html").assert("<p>z</p>");
}

#[test]
fn test_glob_without_matches_is_not_an_error() {
    let temp = assert_fs::TempDir::new().unwrap();

    htmlclean_cmd()
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .arg("*.html")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn test_malformed_protect_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.html").write_str(PAGE).unwrap();

    htmlclean_cmd()
        .current_dir(temp.path())
        .args(["-p", "foo", "a.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid regular expression: foo"));

    temp.child("a.min.html").assert(predicate::path::missing());
}

#[test]
fn test_root_must_be_a_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.html").write_str(PAGE).unwrap();

    htmlclean_cmd()
        .current_dir(temp.path())
        .args(["-r", "nowhere", "a.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("This is not directory: nowhere"));
}

#[test]
fn test_protect_pattern_is_applied() {
    htmlclean_cmd()
        .args(["-p", "/<keep>[\\s\\S]*?<\\/keep>/"])
        .write_stdin("<p> a </p>\n<keep>  b  </keep>")
        .assert()
        .success()
        .stdout("<p>a</p><keep>  b  </keep>");
}

#[test]
fn test_pair_failure_keeps_exit_status() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.html").write_str(PAGE).unwrap();
    temp.child("b.html").write_str(PAGE).unwrap();

    htmlclean_cmd()
        .current_dir(temp.path())
        .args(["-i", "a.html", "-o", "missing/dir/a.html", "-i", "b.html"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to open"));

    temp.child("b.min.html").assert(CLEANED);
}

#[test]
fn test_collision_concatenates() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("p.html").write_str("<p> p </p>").unwrap();
    temp.child("q.html").write_str("<p> q </p>").unwrap();

    htmlclean_cmd()
        .current_dir(temp.path())
        .args(["-i", "p.html", "-o", "all.html", "-i", "q.html", "-o", "all.html"])
        .assert()
        .success();

    temp.child("all.html").assert("<p>p</p><p>q</p>");
}

#[test]
fn test_verbose_reports_pairs() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.html").write_str(PAGE).unwrap();

    htmlclean_cmd()
        .current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["-v", "a.html"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[ARGUMENT]"))
        .stderr(predicate::str::contains("[1] Done"))
        .stderr(predicate::str::contains("a.min.html"));
}
