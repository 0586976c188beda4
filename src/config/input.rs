//! Bundle record file (JSON or YAML)
//!
//! ```yaml
//! index:
//!   name: quay.io/org/index:v1
//!   id: sha256:5c1b...
//!   created: "2021-06-01T10:00:00Z"
//! bundles:
//!   - package_name: etcd
//!     name: etcdoperator.v0.9.4
//!     is_head_of_channel: true
//!     labels:
//!       operatorframework.io/arch.amd64: supported
//!     related_images:
//!       - quay.io/coreos/etcd@sha256:...
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BundleRecord, IndexImage};
use crate::error::{AuditError, Result, input};

/// Serialization format of a bundle record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            _ => None,
        }
    }
}

/// Flattened bundle records of one index image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRecordFile {
    #[serde(default)]
    pub index: IndexImage,

    #[serde(default)]
    pub bundles: Vec<BundleRecord>,
}

impl BundleRecordFile {
    /// Parse records from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(json)?;
        Ok(file)
    }

    /// Parse records from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: Self = serde_yaml::from_str(yaml)?;
        Ok(file)
    }

    /// Load records from a file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        if !path.exists() {
            return Err(input::not_found(shown));
        }
        let format =
            InputFormat::from_path(path).ok_or_else(|| input::unsupported_format(&shown))?;

        let content = std::fs::read_to_string(path)
            .map_err(|e| input::read_failed(&shown, e.to_string()))?;

        let parsed = match format {
            InputFormat::Json => Self::from_json(&content),
            InputFormat::Yaml => Self::from_yaml(&content),
        };
        let file = parsed.map_err(|err| match err {
            AuditError::InputParseFailed { reason, .. } => input::parse_failed(&shown, reason),
            other => other,
        })?;

        tracing::debug!("Loaded {} bundle records from {}", file.bundles.len(), shown);
        Ok(file)
    }
}
