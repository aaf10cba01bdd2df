//! Read-only view of the inputs a generation run depends on.

use std::path::Path;

use crate::domain::AppError;

/// Port for inspecting input paths.
pub trait InputFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the names of non-directory entries in `dir`, sorted.
    fn list_file_names(&self, dir: &Path) -> Result<Vec<String>, AppError>;
}
