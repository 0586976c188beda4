//! JSON report writer

use std::path::{Path, PathBuf};

use crate::domain::MultiArchReport;
use crate::error::{Result, output};

/// File name of a report: `multiarch_<index>_<date>.json`
///
/// Every character of the index name that is not ASCII alphanumeric
/// becomes `_`.
pub fn report_file_name(index_name: &str, date: &str) -> String {
    let slug: String = if index_name.is_empty() {
        "index".to_string()
    } else {
        index_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    };
    format!("multiarch_{slug}_{date}.json")
}

/// Write `report` as pretty JSON into `dir`, returning the file path
pub fn write_report(report: &MultiArchReport, dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| output::write_failed(dir.display().to_string(), e.to_string()))?;

    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| output::write_failed(path.display().to_string(), e.to_string()))?;
    std::fs::write(&path, format!("{json}\n"))
        .map_err(|e| output::write_failed(path.display().to_string(), e.to_string()))?;

    tracing::info!("Report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BundleRecord, Finding, IndexImage, MultiArchBundle, MultiArchFacts, MultiArchPackage,
    };
    use tempfile::TempDir;

    fn sample_report() -> MultiArchReport {
        let index = IndexImage {
            name: "quay.io/org/index:v1".to_string(),
            id: "sha256:index".to_string(),
            created: "2021-06-01T10:00:00Z".to_string(),
        };
        let mut report = MultiArchReport::new(&index, "2021-06-02 08:00:00");
        let record = BundleRecord::new("etcd", "etcdoperator.v0.9.4");
        let facts = MultiArchFacts {
            bundle_name: record.name.clone(),
            supported: ["amd64", "s390x"].iter().map(ToString::to_string).collect(),
            has_multi_arch_support: true,
            ..MultiArchFacts::default()
        };
        let findings = vec![Finding::MissingDisconnectedAnnotation {
            bundle: record.name.clone(),
        }];
        report.packages.push(MultiArchPackage {
            name: "etcd".to_string(),
            bundles: vec![MultiArchBundle::assemble(&record, facts, findings)],
        });
        report
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("quay.io/org/index:v1", "20210602"),
            "multiarch_quay_io_org_index_v1_20210602.json"
        );
    }

    #[test]
    fn test_report_file_name_without_index() {
        assert_eq!(
            report_file_name("", "20210602"),
            "multiarch_index_20210602.json"
        );
    }

    #[test]
    fn test_write_report_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("reports/nested");

        let path = write_report(&sample_report(), &dir, "out.json").unwrap();

        assert_eq!(path, dir.join("out.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_written_report_shape() {
        let temp = TempDir::new().unwrap();
        let path = write_report(&sample_report(), temp.path(), "out.json").unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["image_name"], "quay.io/org/index:v1");
        assert_eq!(value["generated_at"], "2021-06-02 08:00:00");
        let bundle = &value["packages"][0]["bundles"][0];
        assert_eq!(bundle["bundle_data"]["name"], "etcdoperator.v0.9.4");
        assert_eq!(bundle["has_multi_arch_support"], true);
        assert_eq!(bundle["supported"], serde_json::json!(["amd64", "s390x"]));
        assert!(
            bundle["validations"][0]
                .as_str()
                .unwrap()
                .contains("missing the CSV disconnected annotation")
        );
    }
}
