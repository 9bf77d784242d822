use deploykit::api::{
    self, GenerateOptions, MaterializationOutcome, ParamOverrides, PlanFormat, ScaffoldParams,
};
use deploykit::exit_codes;
use std::fs;
use tempfile::TempDir;

use crate::harness::GENERATED_FILES;

#[test]
fn generate_at_materializes_default_lab() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Lab7");

    let outcome = api::generate_at(&root, GenerateOptions::default()).unwrap();

    assert_eq!(outcome.exit_code(), exit_codes::OK);
    assert_eq!(outcome.report.created(), 13);
    for file in GENERATED_FILES {
        assert!(!fs::read_to_string(root.join(file)).unwrap().is_empty(), "{}", file);
    }
}

#[test]
fn resolve_then_apply_reports_per_entry_outcomes() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("lab");
    let manifest = api::resolve(&root, &ScaffoldParams::default()).unwrap();
    assert!(!root.exists(), "resolve must not touch the filesystem");

    let first = api::apply(&manifest);
    let second = api::apply(&manifest);

    assert!(first.is_success());
    assert!(second.is_success());
    assert_eq!(second.outcome_of("README.md"), Some(&MaterializationOutcome::Overwritten));
}

#[test]
fn apply_isolates_a_blocked_entry() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("lab");
    fs::create_dir_all(root.join("playbooks/deploy-app.yml")).unwrap();
    let manifest = api::resolve(&root, &ScaffoldParams::default()).unwrap();

    let report = api::apply(&manifest);

    let failed: Vec<&str> = report.failures().map(|result| result.path.as_str()).collect();
    assert_eq!(failed, vec!["playbooks/deploy-app.yml"]);
    assert!(root.join("playbooks/templates/app.conf.j2").is_file());
}

#[test]
fn bogus_environment_never_creates_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("never");
    let options = GenerateOptions {
        params: ScaffoldParams::default().with_environment("bogus"),
        ..GenerateOptions::default()
    };

    let err = api::generate_at(&root, options).unwrap_err();

    assert_eq!(err.exit_code(), exit_codes::INVALID_CONFIGURATION);
    assert!(!root.exists());
}

#[test]
fn load_params_and_plan_agree_with_generate() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("lab.toml");
    fs::write(&config, "environment = \"staging\"\n").unwrap();
    let overrides = ParamOverrides { ports: vec!["web2=8181".into()], ..ParamOverrides::default() };
    let params = api::load_params(Some(&config), &overrides).unwrap();
    let root = temp.path().join("lab");

    let plan = api::plan(&root, &params).unwrap();
    let outcome =
        api::generate_at(&root, GenerateOptions { params, ..GenerateOptions::default() }).unwrap();

    assert_eq!(plan.fingerprint, outcome.fingerprint);
    assert_eq!(plan.environment, "staging");
    let text = plan.render(PlanFormat::Text).unwrap();
    assert!(text.contains("inventories/staging.yml"));
}

#[test]
fn environments_lists_three_profiles() {
    let listing = api::environments();
    assert_eq!(listing.environments.len(), 3);
    assert_eq!(listing.default_ports.len(), 3);
}

#[cfg(unix)]
#[test]
fn executable_entries_get_owner_execute_bit() {
    use deploykit::domain::Manifest;
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let mut manifest = Manifest::new(temp.path().join("scripts"));
    manifest.push_file("run.sh", "#!/bin/sh\necho ok\n", true).unwrap();

    let report = api::apply(&manifest);

    assert!(report.is_success());
    let path = temp.path().join("scripts/run.sh");
    assert_eq!(fs::read_to_string(&path).unwrap(), "#!/bin/sh\necho ok\n");
    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o100, 0o100);
}
