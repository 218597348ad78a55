use predicates::prelude::*;

mod common;
use common::{TEMPLATE_TEXT, TestEnvironment};

/// Init writes the scaffold under tests/
#[test]
fn test_init_writes_scaffold() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"))
        .stdout(predicate::str::contains("test_example.py"));

    assert_eq!(env.read_file("tests/test_example.py"), TEMPLATE_TEXT);
}

/// Init refuses to overwrite without --force
#[test]
fn test_init_refuses_overwrite() {
    let env = TestEnvironment::new().unwrap();

    env.testplate_command().arg("init").assert().success();
    env.write_file("tests/test_example.py", "# edited by hand\n");

    let mut again = env.testplate_command();
    again
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File already exists"));

    // The hand-edited file survives
    assert_eq!(env.read_file("tests/test_example.py"), "# edited by hand\n");

    let mut forced = env.testplate_command();
    forced.arg("init").arg("--force").assert().success();
    assert_eq!(env.read_file("tests/test_example.py"), TEMPLATE_TEXT);
}

/// Init into a target directory creates the tests/ tree
#[test]
fn test_init_into_directory() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("init").arg("--dir").arg("my-project").assert().success();

    assert_eq!(env.read_file("my-project/tests/test_example.py"), TEMPLATE_TEXT);
}

/// Init applies substitutions
#[test]
fn test_init_with_substitutions() {
    let env = TestEnvironment::new().unwrap();

    let mut cmd = env.testplate_command();
    cmd.arg("init").arg("--set").arg("ServiceClass=InvoiceService").assert().success();

    let written = env.read_file("tests/test_example.py");
    assert!(written.contains("InvoiceService(database=mock_database)"));
    assert!(!written.contains("ServiceClass"));
}
