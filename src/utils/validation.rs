//! Input validation primitives.
//!
//! Provides ergonomic helpers for the validation patterns the loader
//! leans on: non-empty strings, and normalizing empty-but-present
//! values to absent.

use crate::error::{Error, Result};

/// Require a string argument to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::InvalidArgument(format!("{}: {}", field, message)))
    } else {
        Ok(trimmed)
    }
}

/// Treat empty-but-present values as absent.
///
/// Terraform happily emits `""` for an output whose upstream resource
/// was never created, so presence alone is not enough for required
/// fields.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
