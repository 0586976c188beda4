use std::path::PathBuf;

use clap::Parser;

use crate::inspect::ContainerEngine;

/// Arguments for the report command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Audit every head bundle of an index:\n    multiarch-audit report --input bundles.json\n\n\
                  Audit packages matching a name with podman:\n    multiarch-audit report --input bundles.yaml --filter etcd --container-engine podman\n\n\
                  Write the report elsewhere and print a summary:\n    multiarch-audit report --input bundles.json --output-path reports --summary")]
pub struct ReportArgs {
    /// Bundle record file (.json, .yaml or .yml) extracted from the index
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: PathBuf,

    /// Index image name recorded in the report (overrides the file)
    #[arg(long, value_name = "IMAGE")]
    pub index_image: Option<String>,

    /// Container engine used to inspect image manifests
    #[arg(
        long,
        value_enum,
        default_value_t = ContainerEngine::Docker,
        env = "MULTIARCH_AUDIT_CONTAINER_ENGINE"
    )]
    pub container_engine: ContainerEngine,

    /// Only audit packages whose name contains this value
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Directory the JSON report is written to
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
    pub output_path: PathBuf,

    /// Print a per-package summary of the findings
    #[arg(long)]
    pub summary: bool,
}
