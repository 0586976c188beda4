//! Manifest inspection
//!
//! This module handles:
//! - Selecting the container engine used to inspect images
//! - Running `<engine> manifest inspect` and parsing its platforms
//! - Retrying failed inspections under an explicit [`RetryPolicy`]

pub mod command;
pub mod engine;
pub mod retry;

pub use command::CommandInspector;
pub use engine::ContainerEngine;
pub use retry::{RetryPolicy, RetryingInspector};

use crate::domain::ArchitecturePlatform;
use crate::error::Result;

/// Reports the platforms present in an image's manifest list
pub trait ManifestInspector {
    fn inspect(&self, image: &str, engine: ContainerEngine) -> Result<Vec<ArchitecturePlatform>>;
}

impl<T: ManifestInspector + ?Sized> ManifestInspector for &T {
    fn inspect(&self, image: &str, engine: ContainerEngine) -> Result<Vec<ArchitecturePlatform>> {
        (**self).inspect(image, engine)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted inspector for unit tests

    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{ContainerEngine, ManifestInspector};
    use crate::domain::ArchitecturePlatform;
    use crate::error::{Result, inspect};

    /// Inspector answering from a per-image script
    ///
    /// Unknown images report no platforms. An image registered with
    /// [`FakeInspector::fail`] fails its first `times` calls.
    #[derive(Default)]
    pub struct FakeInspector {
        platforms: HashMap<String, Vec<ArchitecturePlatform>>,
        failures: RefCell<HashMap<String, usize>>,
        calls: RefCell<Vec<(String, ContainerEngine)>>,
    }

    impl FakeInspector {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, image: &str, platforms: &[&str]) -> Self {
            let parsed = platforms
                .iter()
                .map(|p| match p.split_once('.') {
                    Some((os, arch)) => ArchitecturePlatform::new(os, arch),
                    None => ArchitecturePlatform::new("linux", *p),
                })
                .collect();
            self.platforms.insert(image.to_string(), parsed);
            self
        }

        pub fn fail(self, image: &str, times: usize) -> Self {
            self.failures.borrow_mut().insert(image.to_string(), times);
            self
        }

        pub fn calls(&self) -> Vec<(String, ContainerEngine)> {
            self.calls.borrow().clone()
        }

        pub fn calls_for(&self, image: &str) -> usize {
            self.calls.borrow().iter().filter(|(i, _)| i == image).count()
        }
    }

    impl ManifestInspector for FakeInspector {
        fn inspect(
            &self,
            image: &str,
            engine: ContainerEngine,
        ) -> Result<Vec<ArchitecturePlatform>> {
            self.calls.borrow_mut().push((image.to_string(), engine));

            let mut failures = self.failures.borrow_mut();
            if let Some(remaining) = failures.get_mut(image) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(inspect::failed(image, "manifest unknown"));
                }
            }

            Ok(self.platforms.get(image).cloned().unwrap_or_default())
        }
    }
}
