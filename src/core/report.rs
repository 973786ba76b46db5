//! Post-generation reporting.
//!
//! Builds the structured summary returned in the CLI response and
//! prints best-effort human status lines. Purely observational: a
//! failure to print never fails the run.

use serde::Serialize;

use crate::config::{DeployConfig, FeatureFlags, Target};
use crate::generate::Artifact;
use crate::log_status;

#[derive(Debug, Serialize)]
pub struct TargetSummary {
    pub target: Target,
    pub enabled: bool,
    pub repository: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub project: String,
    pub account: String,
    pub region: String,
    pub targets: Vec<TargetSummary>,
    pub test_environment: bool,
    pub artifacts: Vec<String>,
    pub next_steps: Vec<String>,
}

const NEXT_STEPS: [&str; 4] = [
    "Review the generated files under the output directory",
    "Commit the workflow files to the repository",
    "Push to the develop branch to exercise a dev deploy",
    "Publish a release (or run the workflow manually) for a prod deploy",
];

pub fn build(
    config: &DeployConfig,
    flags: &FeatureFlags,
    artifacts: &[Artifact],
) -> GenerationReport {
    GenerationReport {
        project: config.project.clone(),
        account: config.account.clone(),
        region: config.region.clone(),
        targets: Target::ALL
            .into_iter()
            .map(|t| TargetSummary {
                target: t,
                enabled: flags.enabled(t),
                repository: config.repository(t).to_string(),
            })
            .collect(),
        test_environment: flags.test_environment,
        artifacts: artifacts.iter().map(|a| a.file_name.clone()).collect(),
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Human-readable status lines. Wording is mode-neutral: the same
/// report backs both `generate` and the dry-run `plan`, so artifact
/// lines never claim a write happened.
pub fn status_lines(report: &GenerationReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Project {} (account {}, region {})",
        report.project, report.account, report.region
    ));

    for target in &report.targets {
        let state = if target.enabled { "enabled" } else { "disabled" };
        lines.push(format!(
            "  {}: {} ({})",
            target.target.as_str(),
            state,
            target.repository
        ));
    }

    for artifact in &report.artifacts {
        lines.push(format!("  artifact: {}", artifact));
    }

    lines.push("Next steps:".to_string());
    for step in &report.next_steps {
        lines.push(format!("  - {}", step));
    }

    lines
}

/// Print the status lines to stderr (terminal-gated).
pub fn print(report: &GenerationReport) {
    for line in status_lines(report) {
        log_status!("report", "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;
    use std::collections::BTreeMap;

    fn demo_config() -> DeployConfig {
        DeployConfig {
            project: "demo".to_string(),
            account: "123".to_string(),
            region: "us-east-1".to_string(),
            role_dev: "arn:dev".to_string(),
            role_prod: "arn:prod".to_string(),
            role_test: None,
            repositories: Target::ALL
                .into_iter()
                .map(|t| (t, format!("demo-{}", t.as_str())))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn report_reflects_flags_and_artifacts() {
        let flags = FeatureFlags {
            apprunner: true,
            ..Default::default()
        };
        let config = demo_config();
        let artifacts = generate::plan(&config, &flags);
        let report = build(&config, &flags, &artifacts);

        assert_eq!(report.project, "demo");
        assert_eq!(report.artifacts.len(), 3);
        assert!(report
            .targets
            .iter()
            .any(|t| t.target == Target::AppRunner && t.enabled));
        assert!(report
            .targets
            .iter()
            .any(|t| t.target == Target::Lambda && !t.enabled));
        assert!(!report.next_steps.is_empty());
    }

    #[test]
    fn status_lines_list_artifacts_without_claiming_writes() {
        let flags = FeatureFlags::default();
        let config = demo_config();
        let artifacts = generate::plan(&config, &flags);
        let report = build(&config, &flags, &artifacts);

        let lines = status_lines(&report);
        assert!(lines.contains(&"  artifact: terraform-plan.yml".to_string()));
        assert!(lines.iter().all(|l| !l.contains("Generated")));
        assert!(lines.iter().all(|l| !l.contains("Wrote")));
    }
}
