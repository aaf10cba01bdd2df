//! Discovery of indexed configuration fragments.
//!
//! A fragment is a file named `<name>.conf_<index>` where `<index>` is made of
//! ASCII digits only. All fragments of one sweep share the stem
//! `<dir>/<name>.conf`; the launcher appends `_<index>` at run time.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::InputFilesystem;

/// Extension marking a configuration fragment (kept in the stem).
pub const FRAGMENT_EXTENSION: &str = ".conf";

/// Separator between the stem and the numeric index.
pub const INDEX_SEPARATOR: char = '_';

/// The discovered batch of job inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSet {
    base_path: PathBuf,
    count: usize,
}

impl FragmentSet {
    /// Create a fragment set from an already-derived stem.
    pub fn new(base_path: PathBuf, count: usize) -> Self {
        Self { base_path, count }
    }

    /// The degenerate set produced when nothing matched.
    pub fn empty() -> Self {
        Self { base_path: PathBuf::new(), count: 0 }
    }

    /// Scan `dir` for fragments.
    ///
    /// The stem is derived from the first matching entry (in name order).
    /// Entries whose stem differs are reported but do not change the result.
    /// An empty match is not an error: callers get an empty set and a warning
    /// has already been logged.
    pub fn discover<F: InputFilesystem + ?Sized>(
        inputs: &F,
        dir: &Path,
    ) -> Result<Self, AppError> {
        let names = inputs.list_file_names(dir)?;
        let mut matches = names.iter().filter_map(|name| fragment_stem(name).map(|stem| (name, stem)));

        let Some((first_name, stem)) = matches.next() else {
            warn!(
                "could not find any *{}{}<index> fragments under {}",
                FRAGMENT_EXTENSION,
                INDEX_SEPARATOR,
                dir.display()
            );
            return Ok(Self::empty());
        };

        let mut count = 1;
        for (name, other) in matches {
            if other != stem {
                warn!(
                    "fragment {} does not share the stem of {}; using {}",
                    name, first_name, stem
                );
            }
            count += 1;
        }

        let base_path = dir.join(stem);
        debug!("discovered {} fragment(s) with base {}", count, base_path.display());
        Ok(Self { base_path, count })
    }

    /// Common stem of all fragments (`<dir>/<name>.conf`); empty if none found.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Number of fragments found.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Highest fragment index, or 0 when nothing was found.
    pub fn max_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Return the `<name>.conf` stem of a fragment file name, if it is one.
pub fn fragment_stem(file_name: &str) -> Option<&str> {
    let (stem, index) = file_name.rsplit_once(INDEX_SEPARATOR)?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let name = stem.strip_suffix(FRAGMENT_EXTENSION)?;
    if name.is_empty() || name.starts_with('.') {
        return None;
    }
    Some(stem)
}
