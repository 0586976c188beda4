//! Validation findings
//!
//! Findings are informational: they never abort an audit and are reported
//! as their display strings.

use std::fmt;

use serde::{Serialize, Serializer};

/// Which list of a bundle an image reference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRole {
    /// Listed under the bundle's related images
    Related,
    /// Referenced by an install strategy deployment
    Install,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRole::Related => write!(f, "related"),
            ImageRole::Install => write!(f, "install"),
        }
    }
}

/// A single problem found while auditing a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A related image could not be inspected after retrying
    InspectionFailed { image: String, reason: String },

    /// An image is referenced by tag instead of by digest
    NotPinned {
        bundle: String,
        role: ImageRole,
        image: String,
    },

    /// Supported architectures without a matching infrastructure label
    MissingLabels {
        bundle: String,
        architectures: Vec<String>,
    },

    /// Multi-arch bundle without the disconnected infrastructure annotation
    MissingDisconnectedAnnotation { bundle: String },

    /// An image manifest does not provide a supported architecture
    MissingArchitecture {
        bundle: String,
        role: ImageRole,
        image: String,
        architecture: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::InspectionFailed { image, reason } => write!(
                f,
                "unable to inspect manifests for the image ({image}) : {reason}"
            ),
            Finding::NotPinned {
                bundle,
                role,
                image,
            } => write!(
                f,
                "[bundle {bundle}]: {role} image ({image}) is not set using SHA"
            ),
            Finding::MissingLabels {
                bundle,
                architectures,
            } => write!(f, "[bundle {bundle}]: missing label for {architectures:?}"),
            Finding::MissingDisconnectedAnnotation { bundle } => write!(
                f,
                "found multi-arch support for the bundle (\"{bundle}\"), however \
                 it is missing the CSV disconnected annotation"
            ),
            Finding::MissingArchitecture {
                bundle,
                role,
                image,
                architecture,
            } => write!(
                f,
                "[bundle {bundle}]: {role} image ({image}) is missing manifest archetype for {architecture}"
            ),
        }
    }
}

impl Serialize for Finding {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_role_display() {
        assert_eq!(ImageRole::Related.to_string(), "related");
        assert_eq!(ImageRole::Install.to_string(), "install");
    }

    #[test]
    fn test_not_pinned_display() {
        let finding = Finding::NotPinned {
            bundle: "etcdoperator.v0.9.4".to_string(),
            role: ImageRole::Related,
            image: "quay.io/coreos/etcd:v3.4".to_string(),
        };
        assert_eq!(
            finding.to_string(),
            "[bundle etcdoperator.v0.9.4]: related image (quay.io/coreos/etcd:v3.4) is not set using SHA"
        );
    }

    #[test]
    fn test_missing_labels_display() {
        let finding = Finding::MissingLabels {
            bundle: "etcdoperator.v0.9.4".to_string(),
            architectures: vec!["arm64".to_string(), "s390x".to_string()],
        };
        assert_eq!(
            finding.to_string(),
            "[bundle etcdoperator.v0.9.4]: missing label for [\"arm64\", \"s390x\"]"
        );
    }

    #[test]
    fn test_missing_annotation_display() {
        let finding = Finding::MissingDisconnectedAnnotation {
            bundle: "etcdoperator.v0.9.4".to_string(),
        };
        let text = finding.to_string();
        assert!(text.contains("(\"etcdoperator.v0.9.4\")"));
        assert!(text.ends_with("missing the CSV disconnected annotation"));
    }

    #[test]
    fn test_missing_architecture_display() {
        let finding = Finding::MissingArchitecture {
            bundle: "etcdoperator.v0.9.4".to_string(),
            role: ImageRole::Install,
            image: "quay.io/coreos/etcd-operator@sha256:abc".to_string(),
            architecture: "s390x".to_string(),
        };
        assert_eq!(
            finding.to_string(),
            "[bundle etcdoperator.v0.9.4]: install image (quay.io/coreos/etcd-operator@sha256:abc) \
             is missing manifest archetype for s390x"
        );
    }

    #[test]
    fn test_finding_serializes_as_string() {
        let finding = Finding::InspectionFailed {
            image: "quay.io/x:1".to_string(),
            reason: "manifest unknown".to_string(),
        };
        let json = serde_json::to_string(&finding).unwrap();
        assert_eq!(
            json,
            "\"unable to inspect manifests for the image (quay.io/x:1) : manifest unknown\""
        );
    }
}
