//! Configuration handling for multiarch-audit
//!
//! This module contains data structures for:
//! - the bundle record file produced by the index extraction step
//! - the settings of a report run, resolved from CLI arguments

pub mod input;
pub mod report;

// Re-export commonly used types
pub use input::BundleRecordFile;
pub use report::ReportConfig;
