use std::path::PathBuf;

/// A generated text file and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Absolute destination path.
    pub path: PathBuf,
    /// File content as UTF-8 text.
    pub content: String,
    /// Whether the file gets the executable bit.
    pub executable: bool,
}
