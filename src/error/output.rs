//! Report writing errors

use super::AuditError;

/// Creates a report write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AuditError {
    AuditError::ReportWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
