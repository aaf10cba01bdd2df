//! Layered parameter resolution.
//!
//! Every field is taken from the first source that has it:
//! command-line override, then site configuration, then built-in default.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::paths;
use crate::domain::{AppError, FragmentSet};
use crate::ports::{SiteConfigSource, SiteLookupError, SiteValue};

/// Site config section holding afterburner launch settings.
pub const AFTERBURNER_SECTION: &str = "afterburner";

/// Site config section holding everything else.
pub const GENERAL_SECTION: &str = "general";

/// Where a field may come from besides an override.
#[derive(Debug, Clone, Copy)]
struct Field {
    /// Parameter name, also the site config key.
    name: &'static str,
    section: &'static str,
    default: Option<&'static str>,
}

impl Field {
    const fn new(
        name: &'static str,
        section: &'static str,
        default: Option<&'static str>,
    ) -> Self {
        Self { name, section, default }
    }
}

const RESULT_DIR: Field = Field::new("result_dir", GENERAL_SECTION, None);
const ABRUN_EXEC: Field = Field::new("abrun_exec", AFTERBURNER_SECTION, Some("./abrun.sh"));
const APP_NAME: Field = Field::new("app_name", AFTERBURNER_SECTION, Some("NetcdfModelMonitor"));
const MAX_CONCURRENT_JOBS: Field = Field::new("max_concurrent_jobs", GENERAL_SECTION, Some("2"));
const USE_BATCH_SCHEDULER: Field =
    Field::new("use_batch_scheduler", GENERAL_SECTION, Some("false"));
const BATCH_SYSTEM: Field = Field::new("batch_system", GENERAL_SECTION, Some("slurm"));
const PYTHON_EXEC: Field = Field::new("python_exec", GENERAL_SECTION, Some("python"));
const EXEC_TIME_LIMIT: Field = Field::new("exec_time_limit", GENERAL_SECTION, Some("PT1H"));
const STITCH_SCRIPT: Field =
    Field::new("stitch_script", GENERAL_SECTION, Some("stitch_netcdf_files.py"));
const PLOT_SCRIPT: Field = Field::new("plot_script", GENERAL_SECTION, Some("generate_plot.py"));
const SUITE_TITLE: Field =
    Field::new("suite_title", GENERAL_SECTION, Some("Submit parallel monitor jobs"));
const MODULES: Field = Field::new("modules", GENERAL_SECTION, None);

/// Explicit per-invocation values, usually from the command line.
///
/// `None` (or an empty module list) means "not given".
#[derive(Debug, Clone, Default)]
pub struct ParameterOverrides {
    pub result_dir: Option<PathBuf>,
    pub abrun_exec: Option<PathBuf>,
    pub app_name: Option<String>,
    pub max_concurrent_jobs: Option<u32>,
    pub use_batch_scheduler: Option<bool>,
    pub batch_system: Option<String>,
    pub python_exec: Option<PathBuf>,
    pub exec_time_limit: Option<String>,
    pub stitch_script: Option<PathBuf>,
    pub plot_script: Option<PathBuf>,
    pub modules: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

/// The full parameter set consumed by the templates.
///
/// Path fields are absolute, except `python_exec` when it is a bare command
/// name and `fragment_base_path` when no fragment was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParameters {
    pub max_index: usize,
    pub max_concurrent_jobs: u32,
    pub exec_time_limit: String,
    pub abrun_exec: PathBuf,
    pub app_name: String,
    pub python_exec: PathBuf,
    pub fragment_base_path: PathBuf,
    pub result_dir: PathBuf,
    pub use_batch_scheduler: bool,
    pub batch_system: String,
    pub working_dir: PathBuf,
    pub stitch_script: PathBuf,
    pub plot_script: PathBuf,
    pub modules: Vec<String>,
    pub suite_title: String,
}

/// Merges defaults, site configuration and overrides.
pub struct ParameterResolver<'a, S: SiteConfigSource + ?Sized> {
    overrides: &'a ParameterOverrides,
    site: &'a S,
    cwd: &'a Path,
}

impl<'a, S: SiteConfigSource + ?Sized> ParameterResolver<'a, S> {
    /// `cwd` anchors every relative path.
    pub fn new(overrides: &'a ParameterOverrides, site: &'a S, cwd: &'a Path) -> Self {
        Self { overrides, site, cwd }
    }

    /// Absolute result directory. Fails if no source provides one.
    pub fn result_dir(&self) -> Result<PathBuf, AppError> {
        let dir = self.layered(&RESULT_DIR, self.overrides.result_dir.clone())?;
        Ok(paths::absolutize(self.cwd, &dir))
    }

    /// Absolute path of the analysis launch executable.
    pub fn abrun_exec(&self) -> Result<PathBuf, AppError> {
        let exec = self.layered(&ABRUN_EXEC, self.overrides.abrun_exec.clone())?;
        Ok(paths::absolutize(self.cwd, &exec))
    }

    /// Resolve every field. `fragments` supplies the index range and stem.
    pub fn resolve(&self, fragments: &FragmentSet) -> Result<ResolvedParameters, AppError> {
        let o = self.overrides;

        let python_exec: PathBuf = self.layered(&PYTHON_EXEC, o.python_exec.clone())?;
        let working_dir = o.working_dir.clone().unwrap_or_else(|| self.cwd.to_path_buf());
        let stitch_script: PathBuf = self.layered(&STITCH_SCRIPT, o.stitch_script.clone())?;
        let plot_script: PathBuf = self.layered(&PLOT_SCRIPT, o.plot_script.clone())?;

        let params = ResolvedParameters {
            max_index: fragments.max_index(),
            max_concurrent_jobs: self.layered(&MAX_CONCURRENT_JOBS, o.max_concurrent_jobs)?,
            exec_time_limit: self.layered(&EXEC_TIME_LIMIT, o.exec_time_limit.clone())?,
            abrun_exec: self.abrun_exec()?,
            app_name: self.layered(&APP_NAME, o.app_name.clone())?,
            python_exec: self.interpreter(&python_exec),
            fragment_base_path: fragments.base_path().to_path_buf(),
            result_dir: self.result_dir()?,
            use_batch_scheduler: self.layered(&USE_BATCH_SCHEDULER, o.use_batch_scheduler)?,
            batch_system: self.layered(&BATCH_SYSTEM, o.batch_system.clone())?,
            working_dir: paths::absolutize(self.cwd, &working_dir),
            stitch_script: paths::absolutize(self.cwd, &stitch_script),
            plot_script: paths::absolutize(self.cwd, &plot_script),
            modules: self.modules()?,
            suite_title: self.layered(&SUITE_TITLE, None)?,
        };
        check_embeddable(&params)?;
        Ok(params)
    }

    fn layered<T: FieldValue>(
        &self,
        field: &Field,
        override_value: Option<T>,
    ) -> Result<T, AppError> {
        if let Some(value) = override_value {
            let shown = value.describe();
            return value
                .normalize()
                .map_err(|reason| AppError::invalid_parameter(field.name, shown, reason));
        }

        let raw = match self.site_scalar(field)? {
            Some(value) => value,
            None => field
                .default
                .map(str::to_string)
                .ok_or_else(|| AppError::MissingParameter(field.name.to_string()))?,
        };

        T::parse(&raw).map_err(|reason| AppError::invalid_parameter(field.name, raw.as_str(), reason))
    }

    fn site_value(&self, field: &Field) -> Result<Option<SiteValue>, AppError> {
        match self.site.get(field.section, field.name) {
            Ok(value) => Ok(Some(value)),
            Err(SiteLookupError::MissingKey { .. }) => Ok(None),
            Err(err @ SiteLookupError::UnsupportedValue { .. }) => {
                Err(AppError::invalid_parameter(field.name, "<unsupported>", err.to_string()))
            }
        }
    }

    fn site_scalar(&self, field: &Field) -> Result<Option<String>, AppError> {
        match self.site_value(field)? {
            Some(SiteValue::Scalar(value)) => Ok(Some(value)),
            Some(SiteValue::List(items)) => Err(AppError::invalid_parameter(
                field.name,
                format!("[{}]", items.join(", ")),
                "expected a single value, not an array",
            )),
            None => Ok(None),
        }
    }

    fn modules(&self) -> Result<Vec<String>, AppError> {
        let modules = if !self.overrides.modules.is_empty() {
            self.overrides.modules.clone()
        } else {
            match self.site_value(&MODULES)? {
                Some(SiteValue::List(items)) => items,
                Some(SiteValue::Scalar(value)) => {
                    value.split_whitespace().map(str::to_string).collect()
                }
                None => Vec::new(),
            }
        };

        if let Some(bad) = modules.iter().find(|m| m.trim().is_empty() || m.contains('\n')) {
            return Err(AppError::invalid_parameter(
                MODULES.name,
                bad.as_str(),
                "module names must be non-empty single-line strings",
            ));
        }
        Ok(modules)
    }

    /// Bare command names stay as-is so `PATH` is searched when the job runs.
    fn interpreter(&self, python_exec: &Path) -> PathBuf {
        let bare = !python_exec.is_absolute()
            && python_exec.parent().is_some_and(|parent| parent.as_os_str().is_empty());
        if bare { python_exec.to_path_buf() } else { paths::absolutize(self.cwd, python_exec) }
    }
}

/// A typed parameter value with text parsing and validation.
trait FieldValue: Sized {
    /// Parse site-config or default text.
    fn parse(raw: &str) -> Result<Self, String>;

    /// Validate an override given already typed, returning the value to use.
    fn normalize(self) -> Result<Self, String>;

    fn describe(&self) -> String;
}

impl FieldValue for String {
    fn parse(raw: &str) -> Result<Self, String> {
        parse_text(raw)
    }

    fn normalize(self) -> Result<Self, String> {
        parse_text(&self)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl FieldValue for PathBuf {
    fn parse(raw: &str) -> Result<Self, String> {
        parse_text(raw).map(PathBuf::from)
    }

    fn normalize(self) -> Result<Self, String> {
        if self.as_os_str().is_empty() {
            return Err("must not be empty".to_string());
        }
        if self.to_string_lossy().contains('\n') {
            return Err("must be a single line".to_string());
        }
        Ok(self)
    }

    fn describe(&self) -> String {
        self.display().to_string()
    }
}

impl FieldValue for u32 {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().parse::<u32>() {
            Ok(value) => value.normalize(),
            Err(_) => Err("expected a positive integer".to_string()),
        }
    }

    fn normalize(self) -> Result<Self, String> {
        if self == 0 {
            return Err("must be at least 1".to_string());
        }
        Ok(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for bool {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err("expected true or false".to_string()),
        }
    }

    fn normalize(self) -> Result<Self, String> {
        Ok(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Values spliced unquoted into the launcher, or inside the double-quoted
/// `script = "..."` lines of the suite, must stay a single shell word.
fn check_embeddable(params: &ResolvedParameters) -> Result<(), AppError> {
    let paths = [
        ("abrun_exec", &params.abrun_exec),
        ("python_exec", &params.python_exec),
        ("fragment_base_path", &params.fragment_base_path),
        ("result_dir", &params.result_dir),
        ("working_dir", &params.working_dir),
        ("stitch_script", &params.stitch_script),
        ("plot_script", &params.plot_script),
    ];
    for (name, path) in paths {
        check_shell_word(name, &path.to_string_lossy())?;
    }
    check_shell_word(APP_NAME.name, &params.app_name)?;
    for module in &params.modules {
        check_shell_word(MODULES.name, module)?;
    }
    if params.suite_title.contains('"') {
        return Err(AppError::invalid_parameter(
            SUITE_TITLE.name,
            params.suite_title.as_str(),
            "must not contain '\"'",
        ));
    }
    Ok(())
}

fn check_shell_word(name: &str, value: &str) -> Result<(), AppError> {
    let unsafe_char =
        value.chars().find(|&c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\' | '`' | '$'));
    match unsafe_char {
        Some(c) => Err(AppError::invalid_parameter(
            name,
            value,
            format!("contains {:?}, which cannot appear unquoted in the generated scripts", c),
        )),
        None => Ok(()),
    }
}

fn parse_text(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("must not be empty".to_string());
    }
    if trimmed.contains('\n') {
        return Err("must be a single line".to_string());
    }
    Ok(trimmed.to_string())
}
