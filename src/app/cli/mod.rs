//! CLI Adapter.

mod create;
mod fragments;
mod params;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, ParameterOverrides};

/// Exit status for command-line usage errors.
const USAGE_EXIT_CODE: i32 = 64;

#[derive(Parser)]
#[command(name = "rsn-suite")]
#[command(version)]
#[command(
    about = "Generate a Cylc suite that runs one afterburner job per configuration fragment",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write rsn_run.sh and suite.rc
    #[clap(visible_alias = "c")]
    Create(GenerateArgs),
    /// Print the resolved parameters as TOML without writing anything
    #[clap(visible_alias = "p")]
    Params(GenerateArgs),
    /// Report the fragments found in the result directory
    #[clap(visible_alias = "f")]
    Fragments {
        /// Directory holding the indexed fragments
        #[arg(short = 'd', long)]
        result_dir: Option<PathBuf>,
        /// Site configuration file (defaults to ./rsn.toml when present)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// Directory holding the indexed fragments
    #[arg(short = 'd', long)]
    result_dir: Option<PathBuf>,
    /// Analysis launch executable
    #[arg(short = 'a', long)]
    abrun_exec: Option<PathBuf>,
    /// Application name passed to the launch executable
    #[arg(short = 'A', long)]
    app_name: Option<String>,
    /// Maximum number of jobs the scheduler runs at once
    #[arg(short = 'm', long)]
    max_concurrent_jobs: Option<u32>,
    /// Submit jobs through the batch scheduler
    #[arg(short = 's', long, conflicts_with = "no_batch")]
    batch: bool,
    /// Run jobs without the batch scheduler, even if the site config enables it
    #[arg(long, conflicts_with = "batch")]
    no_batch: bool,
    /// Batch system identifier
    #[arg(long)]
    batch_system: Option<String>,
    /// Python interpreter for the post-processing tasks
    #[arg(short = 'p', long)]
    python_exec: Option<PathBuf>,
    /// Per-job execution time limit (ISO 8601 duration)
    #[arg(short = 't', long)]
    exec_time_limit: Option<String>,
    /// Script that stitches the per-job outputs
    #[arg(long)]
    stitch_script: Option<PathBuf>,
    /// Script that plots the stitched output
    #[arg(long)]
    plot_script: Option<PathBuf>,
    /// Environment module to load around each job (repeatable)
    #[arg(long = "module", value_name = "NAME")]
    modules: Vec<String>,
    /// Directory the generated files are written to
    #[arg(short = 'o', long = "output-dir")]
    working_dir: Option<PathBuf>,
    /// Site configuration file (defaults to ./rsn.toml when present)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    fn into_parts(self) -> (ParameterOverrides, Option<PathBuf>) {
        let overrides = ParameterOverrides {
            result_dir: self.result_dir,
            abrun_exec: self.abrun_exec,
            app_name: self.app_name,
            max_concurrent_jobs: self.max_concurrent_jobs,
            use_batch_scheduler: batch_override(self.batch, self.no_batch),
            batch_system: self.batch_system,
            python_exec: self.python_exec,
            exec_time_limit: self.exec_time_limit,
            stitch_script: self.stitch_script,
            plot_script: self.plot_script,
            modules: self.modules,
            working_dir: self.working_dir,
        };
        (overrides, self.config)
    }
}

fn batch_override(batch: bool, no_batch: bool) -> Option<bool> {
    match (batch, no_batch) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { USAGE_EXIT_CODE } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let result: Result<(), AppError> = match cli.command {
        Commands::Create(args) => {
            let (overrides, config) = args.into_parts();
            create::run_create(&overrides, config.as_deref())
        }
        Commands::Params(args) => {
            let (overrides, config) = args.into_parts();
            params::run_params(&overrides, config.as_deref())
        }
        Commands::Fragments { result_dir, config } => {
            let overrides = ParameterOverrides { result_dir, ..Default::default() };
            fragments::run_fragments(&overrides, config.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
