//! Progress bar display for audits

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the audited bundles
pub struct ProgressDisplay {
    bundle_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total bundle count
    pub fn new(total_bundles: u64) -> Self {
        let bundle_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bundle_pb = ProgressBar::new(total_bundles);
        bundle_pb.set_style(bundle_style);

        Self { bundle_pb }
    }

    /// Update to show current bundle being audited
    pub fn update_bundle(&self, bundle_name: &str, current: usize, total: usize) {
        // Truncate long names for display
        let display_name = if bundle_name.len() > 50 {
            let cut = bundle_name
                .char_indices()
                .map(|(i, _)| i)
                .find(|&i| i >= bundle_name.len() - 47)
                .unwrap_or(0);
            format!("...{}", &bundle_name[cut..])
        } else {
            bundle_name.to_string()
        };
        self.bundle_pb
            .set_message(format!("({}/{}) {}", current, total, display_name));
    }

    /// Increment bundle progress
    pub fn inc_bundle(&self) {
        self.bundle_pb.inc(1);
    }

    /// Finish progress
    pub fn finish(&self) {
        self.bundle_pb.finish_and_clear();
    }
}
