//! Configuration record and feature flags loaded from provisioning outputs.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::source::OutputSource;
use crate::utils::validation;

/// Output key names in the terraform document.
pub struct OutputKeys;

impl OutputKeys {
    pub const PROJECT: &'static str = "project_name";
    pub const ACCOUNT: &'static str = "account_id";
    pub const REGION: &'static str = "region";
    pub const ROLE_DEV: &'static str = "deploy_role_dev_arn";
    pub const ROLE_PROD: &'static str = "deploy_role_prod_arn";
    pub const ROLE_TEST: &'static str = "deploy_role_test_arn";
    pub const ENABLED_TARGETS: &'static str = "enabled_targets";
}

pub const DEFAULT_REGION: &str = "us-east-1";

/// Deployable platform targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Lambda,
    AppRunner,
    Eks,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Lambda, Target::AppRunner, Target::Eks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Lambda => "lambda",
            Target::AppRunner => "apprunner",
            Target::Eks => "eks",
        }
    }

    /// Output key holding the container repository for this target.
    pub fn repository_key(&self) -> String {
        format!("{}_repository", self.as_str())
    }
}

/// Per-target enablement flags. Missing entries default to disabled.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FeatureFlags {
    pub lambda: bool,
    pub apprunner: bool,
    pub eks: bool,
    pub test_environment: bool,
}

impl FeatureFlags {
    pub fn from_source(source: &dyn OutputSource) -> Self {
        let map = source.flag_map(OutputKeys::ENABLED_TARGETS);
        let get = |key: &str| map.get(key).copied().unwrap_or(false);

        Self {
            lambda: get("lambda"),
            apprunner: get("apprunner"),
            eks: get("eks"),
            test_environment: get("test_environment"),
        }
    }

    pub fn enabled(&self, target: Target) -> bool {
        match target {
            Target::Lambda => self.lambda,
            Target::AppRunner => self.apprunner,
            Target::Eks => self.eks,
        }
    }

    pub fn enabled_targets(&self) -> Vec<Target> {
        Target::ALL
            .into_iter()
            .filter(|t| self.enabled(*t))
            .collect()
    }
}

/// Immutable configuration record. Constructed once at load, read many
/// times, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct DeployConfig {
    pub project: String,
    pub account: String,
    pub region: String,
    pub role_dev: String,
    pub role_prod: String,
    pub role_test: Option<String>,
    /// Fully resolved at load time: explicit output if present,
    /// otherwise the documented `{project}-{target}` default.
    pub repositories: BTreeMap<Target, String>,
}

impl DeployConfig {
    pub fn repository(&self, target: Target) -> &str {
        // populated for every target at load
        &self.repositories[&target]
    }

    /// Role ARN for the named environment. `test` falls back to the
    /// dev role when no dedicated test role was provisioned.
    pub fn role_for(&self, environment: &str) -> &str {
        match environment {
            "prod" => &self.role_prod,
            "test" => self.role_test.as_deref().unwrap_or(&self.role_dev),
            _ => &self.role_dev,
        }
    }
}

/// Raw scalar reads before validation. All fields optional; emptiness
/// is normalized to absence here so the validator sees one shape.
#[derive(Debug, Default)]
pub struct RawConfig {
    pub project: Option<String>,
    pub account: Option<String>,
    pub region: Option<String>,
    pub role_dev: Option<String>,
    pub role_prod: Option<String>,
    pub role_test: Option<String>,
    pub repositories: BTreeMap<Target, Option<String>>,
}

impl RawConfig {
    pub fn from_source(source: &dyn OutputSource) -> Self {
        let read = |key: &str| validation::non_empty(source.scalar(key));

        Self {
            project: read(OutputKeys::PROJECT),
            account: read(OutputKeys::ACCOUNT),
            region: read(OutputKeys::REGION),
            role_dev: read(OutputKeys::ROLE_DEV),
            role_prod: read(OutputKeys::ROLE_PROD),
            role_test: read(OutputKeys::ROLE_TEST),
            repositories: Target::ALL
                .into_iter()
                .map(|t| (t, read(&t.repository_key())))
                .collect(),
        }
    }
}

/// Pure predicate: names of required fields that are missing or empty.
pub fn missing_fields(raw: &RawConfig) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if raw.project.is_none() {
        missing.push(OutputKeys::PROJECT);
    }
    if raw.account.is_none() {
        missing.push(OutputKeys::ACCOUNT);
    }
    if raw.role_dev.is_none() {
        missing.push(OutputKeys::ROLE_DEV);
    }
    if raw.role_prod.is_none() {
        missing.push(OutputKeys::ROLE_PROD);
    }
    missing
}

/// Load and validate the configuration record and feature flags.
///
/// Fails with a single diagnostic naming every missing required field;
/// nothing downstream runs on failure.
pub fn load(source: &dyn OutputSource) -> Result<(DeployConfig, FeatureFlags)> {
    let raw = RawConfig::from_source(source);

    let missing = missing_fields(&raw);
    if !missing.is_empty() {
        return Err(Error::Config(format!(
            "Missing required provisioning outputs: {}",
            missing.join(", ")
        )));
    }

    let flags = FeatureFlags::from_source(source);

    let project = raw.project.unwrap_or_default();
    let repositories = raw
        .repositories
        .into_iter()
        .map(|(t, repo)| {
            let resolved = repo.unwrap_or_else(|| format!("{}-{}", project, t.as_str()));
            (t, resolved)
        })
        .collect();

    let config = DeployConfig {
        account: raw.account.unwrap_or_default(),
        region: raw.region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
        role_dev: raw.role_dev.unwrap_or_default(),
        role_prod: raw.role_prod.unwrap_or_default(),
        role_test: raw.role_test,
        repositories,
        project,
    };

    Ok((config, flags))
}
