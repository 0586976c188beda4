//! Report output
//!
//! - [`json`]: writes the report file
//! - [`summary`]: prints a per-package summary to the terminal

pub mod json;
pub mod summary;

pub use json::{report_file_name, write_report};
pub use summary::print_summary;
