//! Multi-architecture report tree

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::bundle::{BundleRecord, IndexImage};
use super::finding::Finding;

/// Architecture facts extracted from one bundle record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiArchFacts {
    /// Bundle (CSV) name, used to label findings
    pub bundle_name: String,
    /// Labels such as `operatorframework.io/arch.amd64: supported`
    pub infra_labels: Vec<String>,
    pub has_disconnect_annotation: bool,
    /// Related image reference to observed `"<os>.<arch>"` platforms
    pub related_images: BTreeMap<String, Vec<String>>,
    /// Install image reference to observed `"<os>.<arch>"` platforms
    pub install_images: BTreeMap<String, Vec<String>>,
    /// Architecture tokens claimed by labels or provided by images
    pub supported: BTreeSet<String>,
    pub has_multi_arch_support: bool,
    /// Findings raised while gathering manifests
    pub inspection_findings: Vec<Finding>,
    /// Inspection errors, logged against the bundle
    pub errors: Vec<String>,
}

/// An audited bundle as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiArchBundle {
    pub bundle_data: BundleRecord,
    pub has_disconnect_annotation: bool,
    pub infra_labels: Vec<String>,
    pub related_images: BTreeMap<String, Vec<String>>,
    pub install_images: BTreeMap<String, Vec<String>>,
    pub supported: BTreeSet<String>,
    pub has_multi_arch_support: bool,
    pub validations: Vec<Finding>,
}

impl MultiArchBundle {
    /// Fold extracted facts and validator findings into a report entry
    ///
    /// Inspection findings come first, followed by `validations` in the
    /// order the validator produced them. Inspection errors are appended to
    /// the bundle's audit error log.
    pub fn assemble(record: &BundleRecord, facts: MultiArchFacts, validations: Vec<Finding>) -> Self {
        let mut bundle_data = record.clone();
        bundle_data.audit_errors.extend(facts.errors);

        let mut all = facts.inspection_findings;
        all.extend(validations);

        Self {
            bundle_data,
            has_disconnect_annotation: facts.has_disconnect_annotation,
            infra_labels: facts.infra_labels,
            related_images: facts.related_images,
            install_images: facts.install_images,
            supported: facts.supported,
            has_multi_arch_support: facts.has_multi_arch_support,
            validations: all,
        }
    }
}

/// All audited head bundles of one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiArchPackage {
    pub name: String,
    pub bundles: Vec<MultiArchBundle>,
}

/// Multi-architecture audit report for one index image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiArchReport {
    pub image_name: String,
    pub image_id: String,
    pub image_build: String,
    pub generated_at: String,
    pub packages: Vec<MultiArchPackage>,
}

impl MultiArchReport {
    /// Create an empty report for an index image
    pub fn new(index: &IndexImage, generated_at: impl Into<String>) -> Self {
        Self {
            image_name: index.name.clone(),
            image_id: index.id.clone(),
            image_build: index.created.clone(),
            generated_at: generated_at.into(),
            packages: Vec::new(),
        }
    }

    /// Number of audited bundles across all packages
    pub fn bundle_count(&self) -> usize {
        self.packages.iter().map(|p| p.bundles.len()).sum()
    }

    /// Number of findings across all bundles
    pub fn finding_count(&self) -> usize {
        self.packages
            .iter()
            .flat_map(|p| &p.bundles)
            .map(|b| b.validations.len())
            .sum()
    }
}
