use std::path::PathBuf;

use crate::domain::{AppError, RenderedArtifact};

/// Port for persisting rendered artifacts.
pub trait ArtifactStore {
    /// Write every artifact, overwriting existing files.
    ///
    /// Either all artifacts are committed or none is. Returns the written
    /// paths in input order.
    fn commit(&self, artifacts: &[RenderedArtifact]) -> Result<Vec<PathBuf>, AppError>;
}
