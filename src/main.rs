//! multiarch-audit - multi-architecture consistency auditor
//!
//! Audits the head bundles of a container-image index and reports bundles
//! whose labels, annotations and image manifests disagree about the CPU
//! architectures they support.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod inspect;
mod logging;
mod multiarch;
mod output;
mod progress;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Report(args) => commands::report::run(args.into()),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
