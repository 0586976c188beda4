//! Command implementations for the multiarch-audit CLI

pub mod completions;
pub mod report;
pub mod version;
