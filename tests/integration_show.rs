use predicates::prelude::*;

mod common;
use common::{SINGLE_SECTION_TEMPLATE, TEMPLATE_TEXT, TestEnvironment};

/// Show prints the built-in document verbatim
#[test]
fn test_show_prints_document_verbatim() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("show").assert().success().stdout(TEMPLATE_TEXT);
}

/// Two retrievals are byte-identical
#[test]
fn test_show_is_idempotent() {
    let env = TestEnvironment::new().unwrap();

    let first = env.testplate_command().arg("show").output().unwrap();
    let second = env.testplate_command().arg("show").output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

/// Section selection by short name
#[test]
fn test_show_single_section() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("show")
        .arg("--section")
        .arg("async")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("class TestAsyncOperations:"))
        .stdout(predicate::str::contains("async_function_under_test"))
        .stdout(predicate::str::contains("TestDomainEntity").not());
}

/// Section selection by title
#[test]
fn test_show_section_by_title() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("show")
        .arg("--section")
        .arg("domain entity tests")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("class TestDomainEntity:"));
}

/// Unknown sections fail with the available names listed
#[test]
fn test_show_unknown_section() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("show")
        .arg("--section")
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Section 'bogus' not found"))
        .stderr(predicate::str::contains("basic"));
}

/// Quiet mode suppresses logging even under an ambient RUST_LOG
#[test]
fn test_show_quiet_overrides_ambient_rust_log() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.env("RUST_LOG", "debug")
        .arg("--quiet")
        .arg("show")
        .assert()
        .success()
        .stdout(TEMPLATE_TEXT)
        .stderr(predicate::str::is_empty());
}

/// A custom template replaces the built-in document
#[test]
fn test_show_custom_template() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_file("scaffold.py", SINGLE_SECTION_TEMPLATE);

    let mut cmd = env.testplate_command();
    cmd.arg("--template")
        .arg(&path)
        .arg("show")
        .assert()
        .success()
        .stdout(SINGLE_SECTION_TEMPLATE);
}

/// A missing custom template is a user-friendly error
#[test]
fn test_show_missing_custom_template() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("--template")
        .arg("no-such-file.py")
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template file not found"));
}
