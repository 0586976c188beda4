//! Multi-architecture consistency engine
//!
//! The audit of one bundle is a pure pipeline:
//! [`extract`] turns a bundle record into [`MultiArchFacts`](crate::domain::MultiArchFacts),
//! [`validate`] turns those facts into findings, and [`aggregate`] composes
//! both over every head bundle of the index.

pub mod aggregate;
pub mod extract;
pub mod validate;

pub use aggregate::Auditor;
