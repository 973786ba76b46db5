//! Flag-gated workflow generation.
//!
//! `plan` is the pure core: (configuration record, feature flags) in,
//! list of artifacts out. Nothing here touches the filesystem; `write`
//! is the only I/O and lives at the end so the rendering stays
//! independently testable.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{DeployConfig, FeatureFlags, Target};
use crate::core::templates;
use crate::error::Result;
use crate::tags;
use crate::utils::io;
use crate::utils::template::{render, TemplateVars};

pub const TERRAFORM_PLAN_FILE: &str = "terraform-plan.yml";

/// Deployment environments each gated target gets a workflow for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Dev, Environment::Prod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }

    fn trigger(&self) -> &'static str {
        match self {
            Environment::Dev => templates::DEV_TRIGGER,
            Environment::Prod => templates::PROD_TRIGGER,
        }
    }
}

/// One generated pipeline definition: destination file name plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub content: String,
}

pub fn deploy_file_name(target: Target, environment: Environment) -> String {
    format!("deploy-{}-{}.yml", target.as_str(), environment.as_str())
}

/// Render every artifact for the given record and flags.
///
/// Pure function: byte-identical inputs give byte-identical output,
/// no artifact depends on another, and ordering only affects the
/// report. The terraform plan workflow is always last and always
/// present.
pub fn plan(config: &DeployConfig, flags: &FeatureFlags) -> Vec<Artifact> {
    let mut artifacts = Vec::new();

    for target in flags.enabled_targets() {
        for environment in Environment::ALL {
            artifacts.push(deploy_artifact(config, target, environment));
        }
    }

    artifacts.push(terraform_plan_artifact(config, flags));
    artifacts
}

fn deploy_artifact(config: &DeployConfig, target: Target, environment: Environment) -> Artifact {
    // The shell expression producing the revision prefix at run time.
    let revision = format!("${{GITHUB_SHA::{}}}", tags::REVISION_PREFIX_LEN);

    // Fragments first: their own placeholders resolve with the
    // scalar substitutions below.
    let content = render(
        templates::DEPLOY_WORKFLOW,
        &[
            (TemplateVars::TRIGGER, environment.trigger()),
            (TemplateVars::DEPLOY_COMMANDS, templates::deploy_commands(target)),
            (TemplateVars::TARGET, target.as_str()),
            (TemplateVars::ENVIRONMENT, environment.as_str()),
            (TemplateVars::PROJECT, &config.project),
            (TemplateVars::REGION, &config.region),
            (TemplateVars::REPOSITORY, config.repository(target)),
            (TemplateVars::ROLE_ARN, config.role_for(environment.as_str())),
            (TemplateVars::REVISION, &revision),
        ],
    );

    Artifact {
        file_name: deploy_file_name(target, environment),
        content,
    }
}

fn terraform_plan_artifact(config: &DeployConfig, flags: &FeatureFlags) -> Artifact {
    let mut environments = vec!["dev", "prod"];
    if flags.test_environment {
        environments.push("test");
    }

    let matrix = environments
        .iter()
        .map(|env| templates::plan_matrix_entry(env, config.role_for(env)))
        .collect::<Vec<_>>()
        .join("\n");

    let content = render(
        templates::TERRAFORM_PLAN_WORKFLOW,
        &[
            (TemplateVars::ENVIRONMENTS, &matrix),
            (TemplateVars::REGION, &config.region),
        ],
    );

    Artifact {
        file_name: TERRAFORM_PLAN_FILE.to_string(),
        content,
    }
}

/// Write artifacts under the output directory, overwriting existing
/// files. Returns the written paths in generation order.
pub fn write(artifacts: &[Artifact], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let path = out_dir.join(&artifact.file_name);
        io::write_file(&path, &artifact.content, "write workflow")?;
        written.push(path);
    }

    Ok(written)
}
