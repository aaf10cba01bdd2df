//! Filesystem adapter implementations for the input and artifact ports.

mod artifact_store;
mod input_filesystem;

pub use artifact_store::FilesystemArtifactStore;
pub use input_filesystem::FilesystemInputs;
