//! Bundle record file errors

use super::AuditError;

/// Creates an input not found error
pub fn not_found(path: impl Into<String>) -> AuditError {
    AuditError::InputNotFound { path: path.into() }
}

/// Creates an input read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AuditError {
    AuditError::InputReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an input parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AuditError {
    AuditError::InputParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported input format error
pub fn unsupported_format(path: impl Into<String>) -> AuditError {
    AuditError::UnsupportedInputFormat { path: path.into() }
}
