//! `InputFilesystem` implementation backed by `std::fs`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::InputFilesystem;

/// Reads input paths directly from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemInputs;

impl FilesystemInputs {
    pub fn new() -> Self {
        Self
    }
}

impl InputFilesystem for FilesystemInputs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_file_names(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            // Non-UTF-8 names can never match the fragment pattern.
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
