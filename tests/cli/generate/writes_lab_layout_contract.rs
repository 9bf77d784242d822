use crate::harness::{GENERATED_DIRS, GENERATED_FILES, TestContext};
use predicates::prelude::*;
use std::fs;

#[test]
fn generate_writes_declared_layout_into_default_root() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ inventories/ (Created)"))
        .stdout(predicate::str::contains("✓ ansible-deploy.sh (Created)"))
        .stdout(predicate::str::contains("✅ Generated development lab at Lab7 (13 created, 0 overwritten)"))
        .stdout(predicate::str::contains("Fingerprint: "));

    ctx.assert_lab_layout();

    let mut top_level: Vec<String> = fs::read_dir(ctx.lab_path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    top_level.sort();
    assert_eq!(
        top_level,
        vec!["Makefile", "README.md", "ansible-deploy.sh", "group_vars", "inventories", "playbooks", "roles"]
    );
    assert_eq!(GENERATED_DIRS.len() + GENERATED_FILES.len(), 13);
}

#[test]
fn generated_yaml_documents_parse() {
    let ctx = TestContext::new();
    ctx.generate(&[]);

    for file in ["inventories/development.yml", "group_vars/webservers.yml", "playbooks/deploy-app.yml"] {
        let content = ctx.read_lab_file(file);
        serde_yaml::from_str::<serde_yaml::Value>(&content)
            .unwrap_or_else(|e| panic!("{} is not valid YAML: {}", file, e));
    }
}

#[test]
fn templates_keep_ansible_expressions() {
    let ctx = TestContext::new();
    ctx.generate(&[]);

    let app_conf = ctx.read_lab_file("playbooks/templates/app.conf.j2");
    assert!(app_conf.contains("{{"), "app.conf.j2 should carry Jinja expressions for Ansible");
    let supervisor = ctx.read_lab_file("playbooks/templates/supervisor-app.conf.j2");
    assert!(supervisor.contains("[program:{{ app_name }}]"));
}

#[cfg(unix)]
#[test]
fn deploy_script_is_owner_executable() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    ctx.generate(&[]);

    let script = ctx.lab_path().join("ansible-deploy.sh");
    let mode = fs::metadata(&script).unwrap().permissions().mode();
    assert_eq!(mode & 0o100, 0o100, "owner execute bit must be set");
    assert!(ctx.read_lab_file("ansible-deploy.sh").starts_with("#!/bin/bash"));

    let makefile = fs::metadata(ctx.lab_path().join("Makefile")).unwrap().permissions().mode();
    assert_eq!(makefile & 0o100, 0, "Makefile must not be executable");
}

#[test]
fn rerun_is_idempotent_and_restores_edited_files() {
    let ctx = TestContext::new();
    ctx.generate(&[]);
    let original = ctx.read_lab_file("Makefile");
    fs::write(ctx.lab_path().join("Makefile"), "edited\n").unwrap();

    ctx.cli()
        .arg("g")
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 created, 13 overwritten)"))
        .stdout(predicate::str::contains("✗").not());

    assert_eq!(ctx.read_lab_file("Makefile"), original);
    ctx.assert_lab_layout();
}

#[test]
fn custom_root_is_created_with_parents() {
    let ctx = TestContext::new();

    ctx.cli().args(["generate", "--root", "out/nested/lab"]).assert().success();

    let lab = ctx.work_dir().join("out/nested/lab");
    for file in GENERATED_FILES {
        assert!(lab.join(file).is_file(), "missing {}", file);
    }
    assert!(!ctx.lab_path().exists());
}
