//! `ArtifactStore` implementation that commits files all-or-nothing.
//!
//! Every artifact is first written to a hidden sibling (`.<name>.tmp`) in its
//! destination directory. Once all of them are staged, each existing target
//! is moved aside to `.<name>.bak` and the staged file is renamed over it. If
//! any step fails, targets already replaced are restored from their backups
//! (or removed when they did not exist before) and staged files are deleted.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{AppError, RenderedArtifact};
use crate::ports::ArtifactStore;

/// Writes artifacts to their absolute paths on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

/// A target whose staged file has been renamed into place.
struct Replaced<'a> {
    target: &'a Path,
    backup: Option<PathBuf>,
}

impl ArtifactStore for FilesystemArtifactStore {
    fn commit(&self, artifacts: &[RenderedArtifact]) -> Result<Vec<PathBuf>, AppError> {
        let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            let staging = sibling_path(&artifact.path, "tmp");
            if let Err(source) = stage(&staging, artifact) {
                let _ = fs::remove_file(&staging);
                discard(&staged);
                return Err(AppError::Write { path: artifact.path.clone(), source });
            }
            staged.push((staging, artifact.path.as_path()));
        }

        let mut replaced: Vec<Replaced<'_>> = Vec::with_capacity(staged.len());
        for (index, (staging, target)) in staged.iter().enumerate() {
            match replace(staging, target) {
                Ok(backup) => replaced.push(Replaced { target: *target, backup }),
                Err(source) => {
                    rollback(&replaced);
                    discard(&staged[index..]);
                    return Err(AppError::Write { path: target.to_path_buf(), source });
                }
            }
        }

        let mut written = Vec::with_capacity(replaced.len());
        for entry in &replaced {
            if let Some(backup) = &entry.backup {
                let _ = fs::remove_file(backup);
            }
            debug!("wrote {}", entry.target.display());
            written.push(entry.target.to_path_buf());
        }

        Ok(written)
    }
}

fn stage(staging: &Path, artifact: &RenderedArtifact) -> io::Result<()> {
    if artifact.path.is_dir() {
        return Err(io::Error::other("destination is a directory"));
    }
    fs::write(staging, &artifact.content)?;
    if artifact.executable {
        set_executable(staging)?;
    }
    Ok(())
}

/// Move `target` aside if present, then rename `staging` over it.
///
/// On failure the target is back in its original state.
fn replace(staging: &Path, target: &Path) -> io::Result<Option<PathBuf>> {
    let backup = if fs::symlink_metadata(target).is_ok() {
        let backup = sibling_path(target, "bak");
        fs::rename(target, &backup)?;
        Some(backup)
    } else {
        None
    };

    if let Err(err) = fs::rename(staging, target) {
        if let Some(backup) = &backup {
            restore(backup, target);
        }
        return Err(err);
    }
    Ok(backup)
}

fn rollback(replaced: &[Replaced<'_>]) {
    for entry in replaced.iter().rev() {
        match &entry.backup {
            Some(backup) => restore(backup, entry.target),
            None => {
                let _ = fs::remove_file(entry.target);
            }
        }
    }
}

fn restore(backup: &Path, target: &Path) {
    if let Err(err) = fs::rename(backup, target) {
        warn!("could not restore {} from {}: {}", target.display(), backup.display(), err);
    }
}

fn discard(staged: &[(PathBuf, &Path)]) {
    for (staging, _) in staged {
        let _ = fs::remove_file(staging);
    }
}

/// `<dir>/.<name>.<suffix>` next to `target`.
fn sibling_path(target: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or_default());
    name.push(".");
    name.push(suffix);
    target.with_file_name(name)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
