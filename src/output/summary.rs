//! Console summary of a report

use console::Style;

use crate::domain::{MultiArchBundle, MultiArchReport};

/// Print a per-package summary of `report` to stdout
pub fn print_summary(report: &MultiArchReport) {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Index:"),
        report.image_name
    );
    println!(
        "Audited bundles ({}), findings ({}):",
        report.bundle_count(),
        report.finding_count()
    );
    println!();

    for package in &report.packages {
        println!("  {}", Style::new().bold().yellow().apply_to(&package.name));
        for bundle in &package.bundles {
            print_bundle(bundle);
        }
        println!();
    }
}

fn print_bundle(bundle: &MultiArchBundle) {
    let status = if bundle.validations.is_empty() {
        Style::new().green().apply_to("ok")
    } else {
        Style::new().red().apply_to("issues")
    };
    println!(
        "    {} [{}] {} finding(s)",
        bundle.bundle_data.name,
        status,
        bundle.validations.len()
    );
    println!(
        "      {} {}",
        Style::new().bold().apply_to("Architectures:"),
        architectures_line(bundle)
    );
    for finding in &bundle.validations {
        println!("      {} {}", Style::new().dim().apply_to("-"), finding);
    }
}

fn architectures_line(bundle: &MultiArchBundle) -> String {
    if bundle.supported.is_empty() {
        return "none".to_string();
    }
    bundle
        .supported
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
