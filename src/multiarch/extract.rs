//! Architecture extraction
//!
//! Gathers, for one bundle record, everything the validator needs: the
//! arch-support labels, the disconnected annotation, the platforms of every
//! related and install image, and the resulting set of supported
//! architectures.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{BundleRecord, Finding, MultiArchFacts, arch_token};
use crate::error::AuditError;
use crate::inspect::{ContainerEngine, ManifestInspector};

/// Annotation listing the infrastructure features a bundle supports
pub const INFRASTRUCTURE_ANNOTATION: &str = "operators.openshift.io/infrastructure-features";

/// Prefix of the labels declaring architecture support
pub const ARCH_LABEL_PREFIX: &str = "operatorframework.io/arch.";

/// Value a label must carry to count as an infrastructure label
const SUPPORTED_VALUE: &str = "supported";

/// Extracts [`MultiArchFacts`] from bundle records
///
/// The inspector is expected to carry its own retry policy, see
/// [`crate::inspect::RetryingInspector`].
pub struct Extractor<'a, I> {
    inspector: &'a I,
    engine: ContainerEngine,
}

impl<'a, I: ManifestInspector> Extractor<'a, I> {
    pub fn new(inspector: &'a I, engine: ContainerEngine) -> Self {
        Self { inspector, engine }
    }

    /// Extract the architecture facts of one bundle
    pub fn extract(&self, record: &BundleRecord) -> MultiArchFacts {
        let mut facts = MultiArchFacts {
            bundle_name: record.name.clone(),
            infra_labels: infra_labels(record),
            has_disconnect_annotation: has_disconnect_annotation(record),
            ..MultiArchFacts::default()
        };

        for image in &record.install_images {
            let entry = facts.install_images.entry(image.clone()).or_default();
            match self.gather(image) {
                Ok(platforms) => entry.extend(platforms),
                Err(err) => facts.errors.push(err.to_string()),
            }
        }

        for image in &record.related_images {
            let entry = facts.related_images.entry(image.clone()).or_default();
            match self.gather(image) {
                Ok(platforms) => entry.extend(platforms),
                Err(err) => {
                    facts.inspection_findings.push(Finding::InspectionFailed {
                        image: image.clone(),
                        reason: failure_reason(&err),
                    });
                    facts.errors.push(err.to_string());
                }
            }
        }

        facts.supported = supported_architectures(
            &facts.infra_labels,
            &facts.related_images,
            &facts.install_images,
        );
        facts.has_multi_arch_support = facts.supported.len() > 1;

        tracing::debug!("Bundle {} supports {:?}", record.name, facts.supported);

        facts
    }

    /// Inspect one image, rendering its platforms as `"<os>.<arch>"`
    fn gather(&self, image: &str) -> Result<Vec<String>, AuditError> {
        let platforms = self.inspector.inspect(image, self.engine).inspect_err(|err| {
            tracing::error!("{}", err);
        })?;
        Ok(platforms.iter().map(ToString::to_string).collect())
    }
}

/// Engine output behind an inspection error, without the image prefix
fn failure_reason(err: &AuditError) -> String {
    match err {
        AuditError::ManifestInspectFailed { reason, .. }
        | AuditError::InvalidManifestOutput { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

/// Label keys mentioning `arch` whose value is `supported`
pub fn infra_labels(record: &BundleRecord) -> Vec<String> {
    record
        .labels
        .iter()
        .filter(|(key, value)| key.contains("arch") && value.as_str() == SUPPORTED_VALUE)
        .map(|(key, _)| key.clone())
        .collect()
}

/// Whether the infrastructure annotation mentions disconnected environments
pub fn has_disconnect_annotation(record: &BundleRecord) -> bool {
    record
        .annotations
        .get(INFRASTRUCTURE_ANNOTATION)
        .is_some_and(|value| value.to_lowercase().contains("disconnected"))
}

/// Union of label-derived and platform-derived architecture tokens
pub fn supported_architectures(
    infra_labels: &[String],
    related_images: &BTreeMap<String, Vec<String>>,
    install_images: &BTreeMap<String, Vec<String>>,
) -> BTreeSet<String> {
    let mut supported: BTreeSet<String> = infra_labels
        .iter()
        .map(|label| label.replace(ARCH_LABEL_PREFIX, ""))
        .collect();

    let platforms = related_images
        .values()
        .chain(install_images.values())
        .flatten();
    for platform in platforms {
        if let Some(token) = arch_token(platform) {
            supported.insert(token.to_string());
        }
    }

    supported
}
