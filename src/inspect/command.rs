//! Manifest inspection through the container engine CLI
//!
//! Runs `<engine> manifest inspect <image>` and reads the platform of every
//! entry of the returned manifest list. Single-arch images have no manifest
//! list and report no platforms.

use std::process::Command;

use serde::Deserialize;

use super::{ContainerEngine, ManifestInspector};
use crate::domain::ArchitecturePlatform;
use crate::error::{Result, inspect};

#[derive(Debug, Deserialize)]
struct ManifestList {
    #[serde(default)]
    manifests: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    platform: Option<PlatformSpec>,
}

#[derive(Debug, Deserialize)]
struct PlatformSpec {
    #[serde(default)]
    os: String,
    #[serde(default)]
    architecture: String,
}

/// Inspector shelling out to `docker` or `podman`
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInspector;

impl CommandInspector {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestInspector for CommandInspector {
    fn inspect(&self, image: &str, engine: ContainerEngine) -> Result<Vec<ArchitecturePlatform>> {
        tracing::debug!("Running {} manifest inspect {}", engine, image);

        let output = Command::new(engine.program())
            .args(["manifest", "inspect", image])
            .output()
            .map_err(|e| inspect::spawn_failed(engine.program(), image, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(inspect::failed(image, stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_manifest_output(image, &stdout)
    }
}

/// Parse the JSON printed by `manifest inspect`
pub fn parse_manifest_output(image: &str, stdout: &str) -> Result<Vec<ArchitecturePlatform>> {
    let list: ManifestList =
        serde_json::from_str(stdout).map_err(|e| inspect::invalid_output(image, e.to_string()))?;

    Ok(list
        .manifests
        .into_iter()
        .filter_map(|entry| entry.platform)
        .map(|p| ArchitecturePlatform::new(p.os, p.architecture))
        .collect())
}
