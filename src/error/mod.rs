//! Error types and handling for multiarch-audit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Bundle record file errors
//! - [`inspect`]: Manifest inspection errors
//! - [`output`]: Report writing errors

pub mod input;
pub mod inspect;
pub mod output;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for multiarch-audit operations
#[derive(Error, Diagnostic, Debug)]
pub enum AuditError {
    // Input errors
    #[error("Bundle record file not found: {path}")]
    #[diagnostic(
        code(multiarch_audit::input::not_found),
        help("Pass the file produced by the index extraction step with --input")
    )]
    InputNotFound { path: String },

    #[error("Failed to read bundle record file: {path}: {reason}")]
    #[diagnostic(code(multiarch_audit::input::read_failed))]
    InputReadFailed { path: String, reason: String },

    #[error("Failed to parse bundle record file: {path}: {reason}")]
    #[diagnostic(code(multiarch_audit::input::parse_failed))]
    InputParseFailed { path: String, reason: String },

    #[error("Unsupported bundle record file format: {path}")]
    #[diagnostic(
        code(multiarch_audit::input::unsupported_format),
        help("Bundle record files must end in .json, .yaml or .yml")
    )]
    UnsupportedInputFormat { path: String },

    #[error("No data was found for the criteria informed")]
    #[diagnostic(
        code(multiarch_audit::input::no_data),
        help("Ensure the index has head-of-channel bundles and that --filter matches a package name")
    )]
    NoDataFound,

    // Inspection errors
    #[error("Failed to run '{engine} manifest inspect {image}': {reason}")]
    #[diagnostic(
        code(multiarch_audit::inspect::spawn_failed),
        help("Check that the container engine is installed and on PATH")
    )]
    EngineSpawnFailed {
        engine: String,
        image: String,
        reason: String,
    },

    #[error("Unable to inspect manifests for the image ({image}): {reason}")]
    #[diagnostic(code(multiarch_audit::inspect::failed))]
    ManifestInspectFailed { image: String, reason: String },

    #[error("Invalid manifest output for the image ({image}): {reason}")]
    #[diagnostic(code(multiarch_audit::inspect::invalid_output))]
    InvalidManifestOutput { image: String, reason: String },

    // Output errors
    #[error("Failed to write report: {path}: {reason}")]
    #[diagnostic(code(multiarch_audit::output::write_failed))]
    ReportWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(multiarch_audit::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AuditError {
    fn from(err: serde_yaml::Error) -> Self {
        AuditError::InputParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::InputParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AuditError>;
