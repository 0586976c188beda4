//! Domain types shared by the audit pipeline
//!
//! - [`bundle`]: flattened bundle records read from the index
//! - [`platform`]: manifest platforms and architecture tokens
//! - [`finding`]: validation findings attached to audited bundles
//! - [`report`]: the multi-architecture report tree

pub mod bundle;
pub mod finding;
pub mod platform;
pub mod report;

pub use bundle::{BundleRecord, IndexImage};
pub use finding::{Finding, ImageRole};
pub use platform::{ArchitecturePlatform, arch_token};
pub use report::{MultiArchBundle, MultiArchFacts, MultiArchPackage, MultiArchReport};
