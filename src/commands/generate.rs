use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use deckhand::config;
use deckhand::generate;
use deckhand::log_status;
use deckhand::report::{self, GenerationReport};
use deckhand::source::TerraformOutputs;

use super::CmdResult;

pub const DEFAULT_OUT_DIR: &str = ".github/workflows";

#[derive(Args)]
pub struct GenerateArgs {
    /// Provisioning output source: terraform directory, @file, or - for stdin
    #[arg(long)]
    pub source: Option<String>,

    /// Destination directory for workflow files
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out: String,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Provisioning output source: terraform directory, @file, or - for stdin
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum GenerateOutput {
    #[serde(rename = "generate")]
    Generate {
        out_dir: String,
        #[serde(flatten)]
        report: GenerationReport,
    },
    #[serde(rename = "plan")]
    Plan {
        #[serde(flatten)]
        report: GenerationReport,
    },
}

/// Default source: a `terraform` directory when one exists, otherwise
/// the current directory.
fn default_source() -> String {
    if Path::new("terraform").is_dir() {
        "terraform".to_string()
    } else {
        ".".to_string()
    }
}

fn load(source: Option<&str>) -> deckhand::Result<(config::DeployConfig, config::FeatureFlags)> {
    let spec = source.map(str::to_string).unwrap_or_else(default_source);
    log_status!("source", "Reading provisioning outputs from {}", spec);
    let outputs = TerraformOutputs::from_spec(&spec)?;
    config::load(&outputs)
}

pub fn run(args: GenerateArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<GenerateOutput> {
    let (config, flags) = load(args.source.as_deref())?;
    let artifacts = generate::plan(&config, &flags);

    let out_dir = PathBuf::from(&args.out);
    generate::write(&artifacts, &out_dir)?;
    log_status!("generate", "Wrote {} artifacts to {}", artifacts.len(), args.out);

    let report = report::build(&config, &flags, &artifacts);
    report::print(&report);

    Ok((
        GenerateOutput::Generate {
            out_dir: args.out,
            report,
        },
        0,
    ))
}

pub fn run_plan(args: PlanArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<GenerateOutput> {
    let (config, flags) = load(args.source.as_deref())?;
    let artifacts = generate::plan(&config, &flags);

    let report = report::build(&config, &flags, &artifacts);
    report::print(&report);

    Ok((GenerateOutput::Plan { report }, 0))
}
