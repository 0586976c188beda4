//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - report: Report command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod report;

pub use completions::CompletionsArgs;
pub use report::ReportArgs;

/// multiarch-audit - multi-architecture bundle auditor
///
/// Check that bundles claiming multi-arch support ship consistent, labeled,
/// digest-pinned images for every architecture they claim.
#[derive(Parser, Debug)]
#[command(
    name = "multiarch-audit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Audit multi-architecture support of bundles in a container-image index",
    long_about = "multiarch-audit selects the head bundle of every package in an index, \
                  inspects the manifests of its related and install images, and reports \
                  bundles whose labels, annotations and images disagree about the CPU \
                  architectures they support.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  multiarch-audit report --input bundles.json                \x1b[90m# Audit all head bundles\x1b[0m\n   \
                  multiarch-audit report -i bundles.yaml --filter etcd       \x1b[90m# Audit matching packages only\x1b[0m\n   \
                  multiarch-audit report -i bundles.json --container-engine podman\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the multi-arch report for an index
    Report(ReportArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
