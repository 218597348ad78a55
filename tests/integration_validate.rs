use predicates::prelude::*;

mod common;
use common::TestEnvironment;

/// The built-in document fulfills the template contract
#[test]
fn test_validate_builtin_succeeds() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("template document is valid"))
        .stdout(predicate::str::contains("4 sections"));
}

/// JSON report carries the validity verdict and counts
#[test]
fn test_validate_json_report() {
    let env = TestEnvironment::new().unwrap();

    let output = env
        .testplate_command()
        .arg("validate")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], true);
    assert_eq!(report["sections"], 4);
    assert_eq!(report["source"], "builtin");
    assert_eq!(report["placeholders"], 8);
    assert!(report["issues"].as_array().unwrap().is_empty());
}

/// A template missing sections fails validation with exit code 1
#[test]
fn test_validate_missing_sections() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_file(
        "scaffold.py",
        "import pytest\n\n\nclass TestOnly:\n    def test_works(self):\n        assert helper_under_test(1) == 1\n",
    );

    let mut cmd = env.testplate_command();
    cmd.arg("--template")
        .arg(&path)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("is missing"))
        .stderr(predicate::str::contains("validation failed"));
}

/// Syntax problems in a custom template are reported
#[test]
fn test_validate_syntax_smoke_check() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_file(
        "broken.py",
        "import pytest\n\n\nclass TestBroken:\n    def test_broken(self)\n        assert thing(1) == 1\n",
    );

    let mut cmd = env.testplate_command();
    cmd.arg("--template")
        .arg(&path)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[syntax]"));
}

/// JSON report of an invalid template lists the violated properties
#[test]
fn test_validate_json_reports_issues() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_file(
        "scaffold.py",
        "import pytest\n\n\nclass TestOnly:\n    def test_works(self):\n        assert helper_under_test(1) == 1\n",
    );

    let output = env
        .testplate_command()
        .arg("--template")
        .arg(&path)
        .arg("validate")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    let issues = report["issues"].as_array().unwrap();
    assert!(!issues.is_empty());
    assert!(issues.iter().any(|i| i["property"] == "sections"));
}
