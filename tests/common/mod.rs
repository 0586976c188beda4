//! Common test utilities for multiarch-audit integration tests

use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

/// A scratch directory holding record files, reports and a fake engine
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a JSON bundle record file for `bundles`
    pub fn write_records(&self, path: &str, bundles: Vec<Value>) -> PathBuf {
        let records = json!({
            "index": {
                "name": "quay.io/org/index:v4.8",
                "id": "sha256:0f2c",
                "created": "2021-06-01T10:00:00Z"
            },
            "bundles": bundles,
        });
        self.write_file(path, &records.to_string())
    }

    /// Report files written to `dir`
    #[allow(dead_code)]
    pub fn reports_in(&self, dir: &str) -> Vec<PathBuf> {
        let dir = self.path.join(dir);
        let Ok(entries) = std::fs::read_dir(&dir) else {
            return Vec::new();
        };
        let mut reports: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("multiarch_") && n.ends_with(".json"))
            })
            .collect();
        reports.sort();
        reports
    }

    /// Parse the single report written to `dir`
    #[allow(dead_code)]
    pub fn read_report(&self, dir: &str) -> Value {
        let reports = self.reports_in(dir);
        assert_eq!(reports.len(), 1, "expected exactly one report in {dir}");
        let content = std::fs::read_to_string(&reports[0]).expect("Failed to read report");
        serde_json::from_str(&content).expect("Report is not valid JSON")
    }

    /// Directory holding the fake engine, to prepend to `PATH`
    #[allow(dead_code)]
    pub fn bin_dir(&self) -> PathBuf {
        self.path.join("bin")
    }

    /// File recording every image the fake engine was asked about
    #[allow(dead_code)]
    pub fn calls_file(&self) -> PathBuf {
        self.path.join("engine-calls.log")
    }

    /// Install a fake `docker` answering `manifest inspect` from `manifests`
    ///
    /// Each entry maps an image reference to the platforms of its manifest
    /// list. Any other image fails with `manifest unknown`.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn install_fake_engine(&self, manifests: &[(&str, &[&str])]) {
        use std::os::unix::fs::PermissionsExt;

        let mut script = String::from("#!/bin/sh\n");
        script.push_str(&format!("echo \"$3\" >> '{}'\n", self.calls_file().display()));
        script.push_str("case \"$3\" in\n");
        for (image, platforms) in manifests {
            let body = manifest_list(platforms);
            script.push_str(&format!("  '{image}')\n    echo '{body}'\n    ;;\n"));
        }
        script.push_str("  *)\n    echo 'manifest unknown' >&2\n    exit 1\n    ;;\nesac\n");

        let path = self.bin_dir().join("docker");
        std::fs::create_dir_all(self.bin_dir()).expect("Failed to create bin directory");
        std::fs::write(&path, script).expect("Failed to write fake engine");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake engine executable");
    }

    /// `PATH` with the fake engine directory first
    #[allow(dead_code)]
    pub fn path_env(&self) -> String {
        let existing = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin_dir().display(), existing)
    }

    /// Images the fake engine was asked about, in call order
    #[allow(dead_code)]
    pub fn engine_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.calls_file())
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

/// `manifest inspect` JSON for a manifest list with `platforms` ("os.arch")
#[allow(dead_code)]
fn manifest_list(platforms: &[&str]) -> String {
    let manifests: Vec<Value> = platforms
        .iter()
        .map(|p| {
            let (os, arch) = p.split_once('.').unwrap_or(("linux", p));
            json!({ "platform": { "os": os, "architecture": arch } })
        })
        .collect();
    json!({ "schemaVersion": 2, "manifests": manifests }).to_string()
}

/// A head-of-channel bundle record
#[allow(dead_code)]
pub fn head_bundle(package: &str, name: &str) -> Value {
    json!({
        "package_name": package,
        "name": name,
        "channels": ["stable"],
        "default_channel": "stable",
        "is_head_of_channel": true,
    })
}
