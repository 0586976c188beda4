//! Settings of a report run

use std::path::PathBuf;

use crate::cli::ReportArgs;
use crate::domain::IndexImage;
use crate::inspect::ContainerEngine;

/// Resolved settings for one `report` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub index_image: Option<String>,
    pub engine: ContainerEngine,
    /// Package name filter; never an empty string
    pub filter: Option<String>,
    pub output_path: PathBuf,
    pub summary: bool,
}

impl From<ReportArgs> for ReportConfig {
    fn from(args: ReportArgs) -> Self {
        Self {
            input: args.input,
            index_image: args.index_image.filter(|name| !name.trim().is_empty()),
            engine: args.container_engine,
            filter: args.filter.filter(|f| !f.is_empty()),
            output_path: args.output_path,
            summary: args.summary,
        }
    }
}

impl ReportConfig {
    /// Index identity from the record file, with the name overridden if configured
    pub fn index_identity(&self, from_file: &IndexImage) -> IndexImage {
        let mut index = from_file.clone();
        if let Some(name) = &self.index_image {
            index.name.clone_from(name);
        }
        index
    }
}
