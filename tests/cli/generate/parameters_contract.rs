use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn environment_selects_inventory_file_and_profile() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--env", "production", "--app-version", "3.1.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inventories/production.yml"));

    assert!(!ctx.lab_path().join("inventories/development.yml").exists());
    let inventory = ctx.read_lab_file("inventories/production.yml");
    let value: serde_yaml::Value = serde_yaml::from_str(&inventory).unwrap();
    assert_eq!(value["all"]["vars"]["environment"].as_str(), Some("production"));
    assert_eq!(value["all"]["vars"]["app_version"].as_str(), Some("3.1.4"));

    let vars: serde_yaml::Value =
        serde_yaml::from_str(&ctx.read_lab_file("group_vars/webservers.yml")).unwrap();
    assert_eq!(vars["app_config"]["log_level"].as_str(), Some("WARNING"));
    assert_eq!(vars["app_config"]["max_workers"].as_u64(), Some(8));

    assert!(ctx.read_lab_file("Makefile").contains("ENV ?= production\n"));
}

#[test]
fn port_overrides_flow_into_inventory_makefile_and_readme() {
    let ctx = TestContext::new();

    ctx.generate(&["--port", "web1=9080", "--port", "db1=6432"]);

    let inventory: serde_yaml::Value =
        serde_yaml::from_str(&ctx.read_lab_file("inventories/development.yml")).unwrap();
    let children = &inventory["all"]["children"];
    assert_eq!(children["webservers"]["hosts"]["web1"]["app_port"].as_u64(), Some(9080));
    assert_eq!(children["webservers"]["hosts"]["web2"]["app_port"].as_u64(), Some(8081));
    assert_eq!(children["databases"]["hosts"]["db1"]["db_port"].as_u64(), Some(6432));

    assert!(ctx.read_lab_file("Makefile").contains("curl http://localhost:9080/health"));
    assert!(ctx.read_lab_file("README.md").contains("9080"));
}

#[test]
fn config_file_values_are_overridden_by_flags() {
    let ctx = TestContext::new();
    ctx.write_file(
        "lab.toml",
        "environment = \"staging\"\napp_version = \"0.9.0\"\n\n[host_ports]\nweb2 = 9191\n",
    );

    ctx.generate(&["--config", "lab.toml", "--app-version", "1.2.3"]);

    let inventory: serde_yaml::Value =
        serde_yaml::from_str(&ctx.read_lab_file("inventories/staging.yml")).unwrap();
    assert_eq!(inventory["all"]["vars"]["app_version"].as_str(), Some("1.2.3"));
    assert_eq!(
        inventory["all"]["children"]["webservers"]["hosts"]["web2"]["app_port"].as_u64(),
        Some(9191)
    );
}

#[test]
fn duplicate_ports_are_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--port", "web2=8080"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("port 8080 is assigned to both"));
}

#[test]
fn unknown_host_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--port", "web9=9000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown host 'web9'"));
}
