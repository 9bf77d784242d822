use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn unknown_environment_exits_with_configuration_status_and_writes_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--env", "bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Invalid configuration: unrecognized environment 'bogus'"));

    assert!(!ctx.lab_path().exists(), "root must not be created on configuration errors");
}

#[test]
fn out_of_range_port_exits_with_configuration_status() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--port", "web1=70000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be between 1 and 65535"));

    assert!(!ctx.lab_path().exists());
}

#[test]
fn missing_source_document_exits_with_source_status_and_writes_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--source", "Lab7.pdf"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Source document unavailable"))
        .stderr(predicate::str::contains("file does not exist"));

    assert!(!ctx.lab_path().exists());
}

#[test]
fn ignored_source_failure_still_generates() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--source", "Lab7.pdf", "--ignore-source-errors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠️  Skipping source document"));

    ctx.assert_lab_layout();
}

#[test]
fn readable_source_document_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("handout.txt", "Deploy the Flask app with Ansible.\n");

    ctx.cli()
        .args(["generate", "-s", "handout.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📄 Read 35 characters from source document"));
}

#[test]
fn blocked_entry_exits_with_partial_write_status() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.lab_path().join("group_vars/webservers.yml")).unwrap();

    ctx.cli()
        .arg("generate")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("✗ group_vars/webservers.yml"))
        .stdout(predicate::str::contains("✓ README.md (Created)"))
        .stdout(predicate::str::contains("with 1 failed entry"));

    assert!(ctx.lab_path().join("Makefile").is_file());
    assert!(ctx.lab_path().join("group_vars/webservers.yml").is_dir());
}

#[test]
fn malformed_config_file_exits_with_configuration_status() {
    let ctx = TestContext::new();
    ctx.write_file("lab.toml", "environment = \"staging\"\nunexpected = true\n");

    ctx.cli()
        .args(["generate", "--config", "lab.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected"));

    assert!(!ctx.lab_path().exists());
}

#[test]
fn root_occupied_by_file_fails_every_entry() {
    let ctx = TestContext::new();
    ctx.write_file("Lab7", "not a directory\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("✗ inventories/"))
        .stdout(predicate::str::contains("✗ README.md"))
        .stdout(predicate::str::contains("✓").not())
        .stdout(predicate::str::contains("with 13 failed entries"));

    assert!(ctx.lab_path().is_file());
}
