//! Provisioning output source.
//!
//! Reads the `terraform output -json` document and exposes it as a
//! read-only key/value lookup. The document shape is
//! `{"key": {"sensitive": bool, "type": ..., "value": ...}}`; only
//! `value` matters here.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::process::Command;

/// Read-only lookup over provisioning outputs.
///
/// Scalar lookups cover the named string outputs; the structured
/// lookup covers the single map-of-booleans output holding the
/// per-target enablement flags.
pub trait OutputSource {
    fn scalar(&self, key: &str) -> Option<String>;
    fn flag_map(&self, key: &str) -> HashMap<String, bool>;
}

#[derive(Debug, Deserialize)]
struct OutputEntry {
    value: Value,
}

/// Parsed `terraform output -json` document.
#[derive(Debug)]
pub struct TerraformOutputs {
    values: HashMap<String, Value>,
}

impl TerraformOutputs {
    pub fn parse(json: &str) -> Result<Self> {
        let entries: HashMap<String, OutputEntry> = serde_json::from_str(json).map_err(|e| {
            Error::SourceUnavailable(format!("Could not parse terraform outputs: {}", e))
        })?;

        if entries.is_empty() {
            return Err(Error::SourceUnavailable(
                "Terraform produced no outputs (state not applied?)".to_string(),
            ));
        }

        Ok(Self {
            values: entries.into_iter().map(|(k, v)| (k, v.value)).collect(),
        })
    }

    /// Run `terraform output -json` in the given working directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let output = Command::new("terraform")
            .args(["output", "-json"])
            .current_dir(dir)
            .output()
            .map_err(|e| {
                Error::SourceUnavailable(format!("Could not run terraform in {}: {}", dir.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::SourceUnavailable(format!(
                "terraform output failed in {}: {}",
                dir.display(),
                stderr.trim()
            )));
        }

        Self::parse(&String::from_utf8_lossy(&output.stdout))
    }

    /// Resolve a source spec: `-` for stdin, `@path` for a captured
    /// outputs file, anything else is a terraform working directory.
    pub fn from_spec(spec: &str) -> Result<Self> {
        if spec.trim() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| Error::SourceUnavailable(format!("Could not read stdin: {}", e)))?;
            return Self::parse(&buf);
        }

        if let Some(path) = spec.strip_prefix('@') {
            if path.trim().is_empty() {
                return Err(Error::SourceUnavailable(
                    "Invalid source spec '@' (missing file path)".to_string(),
                ));
            }
            let json = std::fs::read_to_string(path).map_err(|e| {
                Error::SourceUnavailable(format!("Could not read {}: {}", path, e))
            })?;
            return Self::parse(&json);
        }

        Self::from_dir(Path::new(spec))
    }
}

impl OutputSource for TerraformOutputs {
    fn scalar(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn flag_map(&self, key: &str) -> HashMap<String, bool> {
        let Some(Value::Object(map)) = self.values.get(key) else {
            return HashMap::new();
        };

        map.iter()
            .filter_map(|(k, v)| v.as_bool().map(|b| (k.clone(), b)))
            .collect()
    }
}
