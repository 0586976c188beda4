//! Bundle records as produced by the index extraction step

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flattened metadata for one published bundle version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRecord {
    /// Package the bundle belongs to
    pub package_name: String,

    /// Bundle (CSV) name, e.g. `etcdoperator.v0.9.4`
    pub name: String,

    #[serde(default)]
    pub channels: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_channel: Option<String>,

    /// Whether this bundle is the head of at least one channel
    #[serde(default)]
    pub is_head_of_channel: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    #[serde(default)]
    pub annotations: BTreeMap<String, String>,

    /// Images listed under `spec.relatedImages`
    #[serde(default)]
    pub related_images: Vec<String>,

    /// Container images referenced by the install strategy deployments
    #[serde(default)]
    pub install_images: Vec<String>,

    /// Errors collected upstream while extracting this bundle
    #[serde(default)]
    pub audit_errors: Vec<String>,
}

impl BundleRecord {
    /// Create a record with only package and bundle names set
    #[cfg(test)]
    pub fn new(package_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the package name passes an optional substring filter
    pub fn matches_filter(&self, filter: Option<&str>) -> bool {
        match filter {
            Some(f) if !f.is_empty() => self.package_name.contains(f),
            _ => true,
        }
    }
}

/// Identity of the index image the records were extracted from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexImage {
    /// Image reference, e.g. `registry.redhat.io/redhat/redhat-operator-index:v4.9`
    #[serde(default)]
    pub name: String,

    /// Content ID reported by the container engine
    #[serde(default)]
    pub id: String,

    /// Build timestamp of the image
    #[serde(default)]
    pub created: String,
}
