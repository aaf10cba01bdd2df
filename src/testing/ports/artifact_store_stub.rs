//! Test double for `ArtifactStore`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, RenderedArtifact};
use crate::ports::ArtifactStore;

/// Records committed artifacts in memory.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    files: RefCell<BTreeMap<PathBuf, RenderedArtifact>>,
    fail_on: Option<PathBuf>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the whole commit when it includes `path`.
    pub fn failing_on(path: impl Into<PathBuf>) -> Self {
        Self { files: RefCell::default(), fail_on: Some(path.into()) }
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).map(|artifact| artifact.content.clone())
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        self.files.borrow().get(path).is_some_and(|artifact| artifact.executable)
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn commit(&self, artifacts: &[RenderedArtifact]) -> Result<Vec<PathBuf>, AppError> {
        if let Some(fail) = &self.fail_on {
            if artifacts.iter().any(|artifact| &artifact.path == fail) {
                return Err(AppError::Write {
                    path: fail.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock write denied"),
                });
            }
        }

        let mut files = self.files.borrow_mut();
        for artifact in artifacts {
            files.insert(artifact.path.clone(), artifact.clone());
        }
        Ok(artifacts.iter().map(|artifact| artifact.path.clone()).collect())
    }
}
