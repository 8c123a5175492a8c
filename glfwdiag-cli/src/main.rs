//! GLFW diagnostics tool.
//!
//! Initializes GLFW, reports monitors and joysticks, creates a default window to report its
//! context and extensions, then prints the report and optionally saves it.

mod opts;

use glfwdiag::{reporter, Report};
use glfwdiag_glfw::{test_default_window, DiagError, GlfwPlatform};
use opts::CLIOpts;
use std::{error, fmt, fs, io, path::PathBuf, process};
use structopt::StructOpt;

#[derive(Debug)]
enum CliError {
  Diag(DiagError),
  Save(PathBuf, io::Error),
}

impl fmt::Display for CliError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      CliError::Diag(e) => write!(f, "diagnostics failed: {}", e),
      CliError::Save(path, e) => write!(f, "cannot save report to {}: {}", path.display(), e),
    }
  }
}

impl error::Error for CliError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      CliError::Diag(e) => Some(e),
      CliError::Save(_, e) => Some(e),
    }
  }
}

impl From<DiagError> for CliError {
  fn from(e: DiagError) -> Self {
    CliError::Diag(e)
  }
}

// Move the errors GLFW raised so far into the report. Called after each step, so errors follow
// the block of the step that raised them.
fn flush_glfw_errors(report: &mut Report, platform: &mut GlfwPlatform) {
  reporter::errors(report, platform.take_errors());
}

fn run(cli_opts: &CLIOpts) -> Result<(), CliError> {
  // nothing is reported if GLFW cannot even start
  let mut platform = GlfwPlatform::new()?;
  let mut report = Report::with_line_ending(cli_opts.line_ending());

  reporter::header(&mut report, &platform);
  flush_glfw_errors(&mut report, &mut platform);

  reporter::monitors(&mut report, &mut platform);
  flush_glfw_errors(&mut report, &mut platform);

  reporter::joysticks(&mut report, &mut platform);
  flush_glfw_errors(&mut report, &mut platform);

  let window = if cli_opts.no_window {
    None
  } else {
    let window = test_default_window(&mut report, &mut platform, &cli_opts.context_hints())?;
    flush_glfw_errors(&mut report, &mut platform);
    Some(window)
  };

  if !cli_opts.quiet {
    print!("{}", report);
  }

  if let Some(path) = cli_opts.output_path() {
    fs::write(&path, report.text()).map_err(|e| CliError::Save(path.clone(), e))?;
    log::info!("report saved to {}", path.display());
  }

  if cli_opts.hold {
    if let Some(mut window) = window {
      window.hold();
    }
  }

  Ok(())
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
  let cli_opts = CLIOpts::from_args();

  if let Err(e) = run(&cli_opts) {
    log::error!("{}", e);
    process::exit(1);
  }
}
