//! End-to-end generation: terraform outputs document in, workflow
//! files on disk out.

use deckhand::config;
use deckhand::generate::{self, Environment};
use deckhand::source::TerraformOutputs;
use std::collections::BTreeSet;
use std::fs;

fn outputs_doc(enabled: &str) -> String {
    format!(
        r#"{{
        "project_name": {{"sensitive": false, "type": "string", "value": "demo"}},
        "account_id": {{"sensitive": false, "type": "string", "value": "123"}},
        "region": {{"sensitive": false, "type": "string", "value": "us-east-1"}},
        "deploy_role_dev_arn": {{"sensitive": false, "type": "string", "value": "arn:dev"}},
        "deploy_role_prod_arn": {{"sensitive": false, "type": "string", "value": "arn:prod"}},
        "enabled_targets": {{"sensitive": false, "type": "object", "value": {enabled}}}
    }}"#
    )
}

fn load(enabled: &str) -> (config::DeployConfig, config::FeatureFlags) {
    let outputs = TerraformOutputs::parse(&outputs_doc(enabled)).unwrap();
    config::load(&outputs).unwrap()
}

#[test]
fn lambda_only_scenario_writes_exactly_three_files() {
    let (config, flags) = load(r#"{"lambda": true, "apprunner": false, "eks": false}"#);
    let artifacts = generate::plan(&config, &flags);

    let dir = tempfile::tempdir().unwrap();
    generate::write(&artifacts, dir.path()).unwrap();

    let written: BTreeSet<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    let expected: BTreeSet<String> = [
        "deploy-lambda-dev.yml",
        "deploy-lambda-prod.yml",
        "terraform-plan.yml",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(written, expected);

    let dev = fs::read_to_string(dir.path().join("deploy-lambda-dev.yml")).unwrap();
    assert!(dev.contains("arn:dev"));
    assert!(dev.contains("us-east-1"));

    let prod = fs::read_to_string(dir.path().join("deploy-lambda-prod.yml")).unwrap();
    assert!(prod.contains("arn:prod"));
    assert!(prod.contains("us-east-1"));
}

#[test]
fn disabled_targets_write_only_terraform_plan() {
    let (config, flags) = load("{}");
    let artifacts = generate::plan(&config, &flags);

    let dir = tempfile::tempdir().unwrap();
    let written = generate::write(&artifacts, dir.path()).unwrap();

    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("terraform-plan.yml"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let (config, flags) = load(r#"{"lambda": true, "eks": true}"#);
    let artifacts = generate::plan(&config, &flags);

    let dir = tempfile::tempdir().unwrap();
    generate::write(&artifacts, dir.path()).unwrap();
    let first: Vec<String> = artifacts
        .iter()
        .map(|a| fs::read_to_string(dir.path().join(&a.file_name)).unwrap())
        .collect();

    let again = generate::plan(&config, &flags);
    generate::write(&again, dir.path()).unwrap();
    let second: Vec<String> = again
        .iter()
        .map(|a| fs::read_to_string(dir.path().join(&a.file_name)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn every_artifact_is_valid_yaml() {
    let (config, flags) = load(
        r#"{"lambda": true, "apprunner": true, "eks": true, "test_environment": true}"#,
    );

    for artifact in generate::plan(&config, &flags) {
        let parsed: Result<serde_yml::Value, _> = serde_yml::from_str(&artifact.content);
        assert!(
            parsed.is_ok(),
            "{} is not valid YAML: {:?}",
            artifact.file_name,
            parsed.err()
        );
    }
}

#[test]
fn artifact_names_follow_the_naming_pattern() {
    use deckhand::config::Target;

    for target in Target::ALL {
        for environment in Environment::ALL {
            let name = generate::deploy_file_name(target, environment);
            assert_eq!(
                name,
                format!("deploy-{}-{}.yml", target.as_str(), environment.as_str())
            );
        }
    }
}

#[test]
fn plan_rendering_leaves_filesystem_untouched() {
    let (config, flags) = load(r#"{"lambda": true, "eks": true}"#);
    let dir = tempfile::tempdir().unwrap();

    let artifacts = generate::plan(&config, &flags);
    assert_eq!(artifacts.len(), 5);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn write_failure_reports_io_error_code() {
    let (config, flags) = load("{}");
    let artifacts = generate::plan(&config, &flags);

    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "not a directory").unwrap();

    let err = generate::write(&artifacts, &blocked).unwrap_err();
    assert_eq!(err.code(), "IO_ERROR");
}

#[test]
fn missing_required_output_halts_before_generation() {
    let doc = r#"{
        "project_name": {"sensitive": false, "type": "string", "value": "demo"},
        "deploy_role_dev_arn": {"sensitive": false, "type": "string", "value": ""}
    }"#;
    let outputs = TerraformOutputs::parse(doc).unwrap();

    let err = config::load(&outputs).unwrap_err();
    assert_eq!(err.code(), "CONFIG_ERROR");
    let msg = err.to_string();
    assert!(msg.contains("account_id"));
    assert!(msg.contains("deploy_role_dev_arn"));
    assert!(msg.contains("deploy_role_prod_arn"));
}
