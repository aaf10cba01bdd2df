//! Shared testing harness for `rsn-suite` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Result directory name used by the default scenario.
pub(crate) const RESULT_DIR: &str = "run";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    _root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty work directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        // The binary sees the canonical cwd; keep expectations comparable.
        let canonical = root.path().canonicalize().expect("Failed to canonicalize temp directory");
        let work_dir = canonical.join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { _root: root, work_dir }
    }

    /// A work directory holding `abrun.sh` and `run/case.conf_0..count`.
    pub(crate) fn with_sweep(count: usize) -> Self {
        let ctx = Self::new();
        ctx.write_abrun();
        ctx.write_fragments(RESULT_DIR, "case", count);
        ctx
    }

    /// Path to the work directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Absolute path of the default result directory.
    pub(crate) fn result_dir(&self) -> PathBuf {
        self.work_dir.join(RESULT_DIR)
    }

    /// Build a command for invoking the compiled `rsn-suite` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rsn-suite").expect("Failed to locate rsn-suite binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Create `<dir>/<stem>.conf_<i>` for `i` in `0..count`; returns the directory.
    pub(crate) fn write_fragments(&self, dir: &str, stem: &str, count: usize) -> PathBuf {
        let dir = self.work_dir.join(dir);
        fs::create_dir_all(&dir).expect("Failed to create result directory");
        for index in 0..count {
            fs::write(dir.join(format!("{stem}.conf_{index}")), format!("index = {index}\n"))
                .expect("Failed to write fragment");
        }
        dir
    }

    /// Create a stand-in `abrun.sh` in the work directory.
    pub(crate) fn write_abrun(&self) -> PathBuf {
        let path = self.work_dir.join("abrun.sh");
        fs::write(&path, "#!/bin/sh\nexit 0\n").expect("Failed to write abrun.sh");
        path
    }

    /// Write `rsn.toml` in the work directory.
    pub(crate) fn write_site_config(&self, content: &str) -> PathBuf {
        self.write_file("rsn.toml", content)
    }

    /// Write an arbitrary file relative to the work directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|err| panic!("Failed to read {relative}: {err}"))
    }

    /// Assert that neither generated file exists in `dir` (relative to the work directory).
    pub(crate) fn assert_nothing_written_in(&self, relative: &str) {
        let dir = self.work_dir.join(relative);
        for name in ["rsn_run.sh", "suite.rc"] {
            assert!(!dir.join(name).exists(), "{} should not exist", dir.join(name).display());
        }
    }

    /// Assert that neither generated file exists in the work directory.
    pub(crate) fn assert_nothing_written(&self) {
        self.assert_nothing_written_in(".");
    }
}
