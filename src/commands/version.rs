//! Version command implementation

use crate::error::Result;
use crate::inspect::RetryPolicy;

/// Run version command
pub fn run() -> Result<()> {
    println!("multiarch-audit {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Inspection attempts: {}", RetryPolicy::default().max_attempts);

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
