//! Manifest inspection errors

use super::AuditError;

/// Creates an engine spawn failed error
pub fn spawn_failed(
    engine: impl Into<String>,
    image: impl Into<String>,
    reason: impl Into<String>,
) -> AuditError {
    AuditError::EngineSpawnFailed {
        engine: engine.into(),
        image: image.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest inspect failed error
pub fn failed(image: impl Into<String>, reason: impl Into<String>) -> AuditError {
    AuditError::ManifestInspectFailed {
        image: image.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest output error
pub fn invalid_output(image: impl Into<String>, reason: impl Into<String>) -> AuditError {
    AuditError::InvalidManifestOutput {
        image: image.into(),
        reason: reason.into(),
    }
}
