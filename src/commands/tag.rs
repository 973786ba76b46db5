use clap::Args;
use serde::Serialize;

use deckhand::tags::{self, ImageTags};

use super::CmdResult;

#[derive(Args)]
pub struct TagArgs {
    /// Deployment environment (dev, prod, ...)
    pub environment: String,

    /// Logical name of the deployable
    pub name: String,

    /// Full revision identifier (e.g. a commit hash)
    pub revision: String,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum TagOutput {
    #[serde(rename = "tag")]
    Tag { tags: ImageTags },
}

pub fn run(args: TagArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<TagOutput> {
    let tags = tags::derive(&args.environment, &args.name, &args.revision)?;
    Ok((TagOutput::Tag { tags }, 0))
}
