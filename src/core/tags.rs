//! Image tag derivation.
//!
//! Every image push carries three tags: a primary tag pinning the
//! revision, plus two moving aliases. The primary tag is the value a
//! deploy step must use; aliases exist for humans and for "latest"
//! pulls. Downstream steps receive the primary tag verbatim (as a step
//! output) and never reconstruct it by truncation.

use serde::Serialize;

use crate::error::Result;
use crate::utils::validation;

/// Characters of the revision kept in the primary tag.
pub const REVISION_PREFIX_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageTags {
    /// `{environment}-{name}-{revision prefix}`
    pub primary: String,
    /// `{environment}-{name}-latest`
    pub name_latest: String,
    /// `{environment}-latest`
    pub environment_latest: String,
}

impl ImageTags {
    pub fn all(&self) -> [&str; 3] {
        [&self.primary, &self.name_latest, &self.environment_latest]
    }
}

/// Derive the tag set for a revision of a named deployable.
pub fn derive(environment: &str, name: &str, revision: &str) -> Result<ImageTags> {
    let environment =
        validation::require_non_empty(environment, "environment", "Environment is required")?;
    let name = validation::require_non_empty(name, "name", "Logical name is required")?;
    let revision =
        validation::require_non_empty(revision, "revision", "Revision is required")?;

    let prefix: String = revision.chars().take(REVISION_PREFIX_LEN).collect();

    Ok(ImageTags {
        primary: format!("{}-{}-{}", environment, name, prefix),
        name_latest: format!("{}-{}-latest", environment, name),
        environment_latest: format!("{}-latest", environment),
    })
}
