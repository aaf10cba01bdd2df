use std::path::{Component, Path, PathBuf};

/// File name of the generated launcher script.
pub const LAUNCHER_FILE: &str = "rsn_run.sh";

/// File name of the generated Cylc suite definition.
pub const SUITE_FILE: &str = "suite.rc";

/// `<working_dir>/rsn_run.sh`
pub fn launcher(working_dir: &Path) -> PathBuf {
    working_dir.join(LAUNCHER_FILE)
}

/// `<working_dir>/suite.rc`
pub fn suite(working_dir: &Path) -> PathBuf {
    working_dir.join(SUITE_FILE)
}

/// Make `path` absolute against `cwd` and drop `.`/`..` components.
///
/// Purely lexical; the filesystem is not consulted.
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { normalize(path) } else { normalize(&cwd.join(path)) }
}

/// Resolve `.` and `..` components logically.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
