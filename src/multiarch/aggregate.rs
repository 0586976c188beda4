//! Package aggregation
//!
//! Selects head-of-channel bundles, groups them by package, audits each one
//! and assembles the report.

use std::collections::HashMap;

use crate::domain::{BundleRecord, IndexImage, MultiArchBundle, MultiArchPackage, MultiArchReport};
use crate::inspect::{ContainerEngine, ManifestInspector};
use crate::progress::ProgressDisplay;

use super::extract::Extractor;
use super::validate::validate;

/// Head bundles of one package retained for auditing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSelection<'r> {
    pub name: String,
    pub bundles: Vec<&'r BundleRecord>,
}

/// Runs the multi-arch audit over a set of bundle records
pub struct Auditor<'a, I> {
    extractor: Extractor<'a, I>,
    filter: Option<String>,
    progress: Option<&'a ProgressDisplay>,
}

impl<'a, I: ManifestInspector> Auditor<'a, I> {
    pub fn new(inspector: &'a I, engine: ContainerEngine) -> Self {
        Self {
            extractor: Extractor::new(inspector, engine),
            filter: None,
            progress: None,
        }
    }

    /// Only audit packages whose name contains `filter`
    #[must_use]
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter.filter(|f| !f.is_empty());
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a ProgressDisplay) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Group head-of-channel bundles passing the filter by package name
    ///
    /// Packages keep the order in which they first appear, and bundles keep
    /// input order within their package.
    pub fn select<'r>(&self, records: &'r [BundleRecord]) -> Vec<PackageSelection<'r>> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut selection: Vec<PackageSelection<'r>> = Vec::new();

        for record in records {
            if !record.is_head_of_channel || !record.matches_filter(self.filter.as_deref()) {
                continue;
            }
            let index = *positions
                .entry(record.package_name.as_str())
                .or_insert_with(|| {
                    selection.push(PackageSelection {
                        name: record.package_name.clone(),
                        bundles: Vec::new(),
                    });
                    selection.len() - 1
                });
            selection[index].bundles.push(record);
        }

        selection
    }

    /// Extract and validate a single bundle
    pub fn audit_bundle(&self, record: &BundleRecord) -> MultiArchBundle {
        let facts = self.extractor.extract(record);
        let findings = validate(&facts);
        MultiArchBundle::assemble(record, facts, findings)
    }

    /// Audit every selected bundle and build the report
    ///
    /// Packages are sorted by name.
    pub fn report(
        &self,
        selection: &[PackageSelection<'_>],
        index: &IndexImage,
        generated_at: impl Into<String>,
    ) -> MultiArchReport {
        let mut report = MultiArchReport::new(index, generated_at);
        let total: usize = selection.iter().map(|p| p.bundles.len()).sum();
        let mut current = 0;

        for package in selection {
            let mut bundles = Vec::with_capacity(package.bundles.len());
            for record in &package.bundles {
                current += 1;
                if let Some(progress) = self.progress {
                    progress.update_bundle(&record.name, current, total);
                }
                tracing::debug!("Auditing bundle {} of package {}", record.name, package.name);

                bundles.push(self.audit_bundle(record));

                if let Some(progress) = self.progress {
                    progress.inc_bundle();
                }
            }
            report.packages.push(MultiArchPackage {
                name: package.name.clone(),
                bundles,
            });
        }

        report.packages.sort_by(|a, b| a.name.cmp(&b.name));
        report
    }
}
