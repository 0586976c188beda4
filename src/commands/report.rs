//! Report command implementation
//!
//! Loads the bundle records of an index, audits the head bundle of every
//! selected package and writes the multi-arch report.

use crate::config::{BundleRecordFile, ReportConfig};
use crate::domain::MultiArchReport;
use crate::error::{AuditError, Result};
use crate::inspect::{CommandInspector, ManifestInspector, RetryPolicy, RetryingInspector};
use crate::multiarch::Auditor;
use crate::output;
use crate::progress::ProgressDisplay;

/// Run report command
pub fn run(config: ReportConfig) -> Result<()> {
    let inspector = RetryingInspector::new(CommandInspector::new(), RetryPolicy::default());
    let now = chrono::Local::now();

    let report = build_report(
        &config,
        &inspector,
        &now.format("%Y-%m-%d %H:%M:%S").to_string(),
        true,
    )?;

    let date = now.format("%Y%m%d").to_string();
    let file_name = output::report_file_name(&report.image_name, &date);
    let path = output::write_report(&report, &config.output_path, &file_name)?;

    if config.summary {
        output::print_summary(&report);
    }
    println!(
        "Report generated for {} bundle(s): {}",
        report.bundle_count(),
        path.display()
    );

    Ok(())
}

/// Load records, audit the selection and return the report
///
/// Fails with [`AuditError::NoDataFound`] when no head bundle passes the
/// filter.
fn build_report<I: ManifestInspector>(
    config: &ReportConfig,
    inspector: &I,
    generated_at: &str,
    show_progress: bool,
) -> Result<MultiArchReport> {
    let records = BundleRecordFile::load(&config.input)?;
    let index = config.index_identity(&records.index);
    tracing::info!(
        "Loaded {} bundle record(s) for index {}",
        records.bundles.len(),
        index.name
    );

    let auditor = Auditor::new(inspector, config.engine).with_filter(config.filter.clone());
    let selection = auditor.select(&records.bundles);
    if selection.is_empty() {
        return Err(AuditError::NoDataFound);
    }

    let total: usize = selection.iter().map(|p| p.bundles.len()).sum();
    tracing::info!(
        "Auditing {} head bundle(s) across {} package(s)",
        total,
        selection.len()
    );

    let progress = show_progress.then(|| ProgressDisplay::new(total as u64));
    let auditor = match &progress {
        Some(progress) => auditor.with_progress(progress),
        None => auditor,
    };

    let report = auditor.report(&selection, &index, generated_at);

    if let Some(progress) = &progress {
        progress.finish();
    }

    tracing::info!("Audit finished with {} finding(s)", report.finding_count());
    Ok(report)
}
