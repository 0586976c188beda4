//! Consistency validation
//!
//! Checks run in a fixed order: digest pinning, label completeness,
//! disconnected annotation, architecture coverage. Every check is a no-op
//! for bundles without multi-arch support.

use std::collections::BTreeMap;

use crate::domain::{Finding, ImageRole, MultiArchFacts};

const DIGEST_MARKER: &str = "@sha256";

/// Run every check against the extracted facts
pub fn validate(facts: &MultiArchFacts) -> Vec<Finding> {
    let mut findings = Vec::new();
    check_digests(facts, &mut findings);
    check_labels(facts, &mut findings);
    check_annotation(facts, &mut findings);
    check_coverage(facts, &mut findings);
    findings
}

fn images_by_role(
    facts: &MultiArchFacts,
) -> [(ImageRole, &BTreeMap<String, Vec<String>>); 2] {
    [
        (ImageRole::Related, &facts.related_images),
        (ImageRole::Install, &facts.install_images),
    ]
}

/// Every image should be referenced by digest
fn check_digests(facts: &MultiArchFacts, findings: &mut Vec<Finding>) {
    if !facts.has_multi_arch_support {
        return;
    }
    for (role, images) in images_by_role(facts) {
        for image in images.keys().filter(|i| !i.contains(DIGEST_MARKER)) {
            findings.push(Finding::NotPinned {
                bundle: facts.bundle_name.clone(),
                role,
                image: image.clone(),
            });
        }
    }
}

/// Every supported architecture should have an infrastructure label
fn check_labels(facts: &MultiArchFacts, findings: &mut Vec<Finding>) {
    if !facts.has_multi_arch_support {
        return;
    }
    let missing: Vec<String> = facts
        .supported
        .iter()
        .filter(|arch| !facts.infra_labels.iter().any(|l| l.contains(arch.as_str())))
        .cloned()
        .collect();

    if !missing.is_empty() {
        findings.push(Finding::MissingLabels {
            bundle: facts.bundle_name.clone(),
            architectures: missing,
        });
    }
}

/// Multi-arch bundles should declare disconnected support
fn check_annotation(facts: &MultiArchFacts, findings: &mut Vec<Finding>) {
    if facts.has_multi_arch_support && !facts.has_disconnect_annotation {
        findings.push(Finding::MissingDisconnectedAnnotation {
            bundle: facts.bundle_name.clone(),
        });
    }
}

/// Every image should provide every supported architecture
fn check_coverage(facts: &MultiArchFacts, findings: &mut Vec<Finding>) {
    if !facts.has_multi_arch_support {
        return;
    }
    for (role, images) in images_by_role(facts) {
        for (image, platforms) in images {
            for arch in &facts.supported {
                if !platforms.iter().any(|p| p.contains(arch.as_str())) {
                    findings.push(Finding::MissingArchitecture {
                        bundle: facts.bundle_name.clone(),
                        role,
                        image: image.clone(),
                        architecture: arch.clone(),
                    });
                }
            }
        }
    }
}
