//! Manifest platform types
//!
//! A manifest list reports one (os, architecture) pair per image it carries.
//! The audit records them as `"<os>.<arch>"` strings and later turns those
//! strings back into bare architecture tokens with [`arch_token`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One (operating system, architecture) pair from a manifest list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchitecturePlatform {
    pub os: String,
    pub architecture: String,
}

impl ArchitecturePlatform {
    pub fn new(os: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            architecture: architecture.into(),
        }
    }
}

impl fmt::Display for ArchitecturePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.os, self.architecture)
    }
}

/// Derive the architecture token from a recorded platform string
///
/// `linux.amd64` yields `amd64`; a string without a dot is taken whole.
/// Empty strings carry no token.
pub fn arch_token(platform: &str) -> Option<&str> {
    if platform.is_empty() {
        return None;
    }
    match platform.split_once('.') {
        Some((_, arch)) => Some(arch),
        None => Some(platform),
    }
}
