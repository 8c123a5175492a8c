use glfwdiag::reporter::DEFAULT_REPORT_FILE_NAME;
use glfwdiag::LineEnding;
use glfwdiag_glfw::{parse_version, ContextHints, Profile, Robustness};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "glfwdiag", about = "GLFW diagnostics tool")]
pub struct CLIOpts {
  #[structopt(short, long, parse(from_os_str))]
  /// Save the report to the given file.
  output: Option<PathBuf>,

  #[structopt(long)]
  /// Save the report to GLFWDIAG.txt (ignored if --output is set).
  save: bool,

  #[structopt(short, long)]
  /// Don’t print the report on the standard output.
  pub quiet: bool,

  #[structopt(long, conflicts_with = "lf")]
  /// Terminate lines with CR LF.
  crlf: bool,

  #[structopt(long)]
  /// Terminate lines with LF.
  lf: bool,

  #[structopt(long)]
  /// Skip the default window test (no context nor extension report).
  pub no_window: bool,

  #[structopt(long, conflicts_with = "no-window")]
  /// Keep the test window open until it’s closed.
  pub hold: bool,

  #[structopt(long, parse(try_from_str = parse_version))]
  /// Requested context version, as MAJOR.MINOR.
  gl_version: Option<(u32, u32)>,

  #[structopt(long, possible_values = &["any", "core", "compat"])]
  /// Requested OpenGL profile.
  profile: Option<Profile>,

  #[structopt(long)]
  /// Request a forward-compatible context.
  forward_compat: bool,

  #[structopt(long)]
  /// Request a debug context.
  debug_context: bool,

  #[structopt(long, possible_values = &["none", "lose"])]
  /// Requested robustness strategy.
  robustness: Option<Robustness>,
}

impl CLIOpts {
  /// Where to save the report, if anywhere.
  pub fn output_path(&self) -> Option<PathBuf> {
    self
      .output
      .clone()
      .or_else(|| self.save.then(|| PathBuf::from(DEFAULT_REPORT_FILE_NAME)))
  }

  /// Line ending of the report. `--crlf` and `--lf` override the platform default.
  pub fn line_ending(&self) -> LineEnding {
    if self.crlf {
      LineEnding::CrLf
    } else if self.lf {
      LineEnding::Lf
    } else {
      LineEnding::default()
    }
  }

  /// Hints to create the test window with. Anything not asked for is left to GLFW.
  pub fn context_hints(&self) -> ContextHints {
    ContextHints::default()
      .set_version(self.gl_version)
      .set_profile(self.profile)
      .set_forward_compat(self.forward_compat)
      .set_debug(self.debug_context)
      .set_robustness(self.robustness)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn try_parse(args: &[&str]) -> Option<CLIOpts> {
    CLIOpts::from_iter_safe(std::iter::once("glfwdiag").chain(args.iter().copied())).ok()
  }

  fn parse(args: &[&str]) -> CLIOpts {
    try_parse(args).expect("valid arguments")
  }

  #[test]
  fn defaults() {
    let opts = parse(&[]);
    assert_eq!(opts.output_path(), None);
    assert_eq!(opts.line_ending(), LineEnding::default());
    assert_eq!(opts.context_hints(), ContextHints::default());
    assert!(!opts.quiet && !opts.no_window && !opts.hold);
  }

  #[test]
  fn save_uses_default_file_name() {
    assert_eq!(
      parse(&["--save"]).output_path(),
      Some(PathBuf::from("GLFWDIAG.txt"))
    );
    assert_eq!(
      parse(&["--save", "-o", "out.txt"]).output_path(),
      Some(PathBuf::from("out.txt"))
    );
  }

  #[test]
  fn line_endings() {
    assert_eq!(parse(&["--crlf"]).line_ending(), LineEnding::CrLf);
    assert_eq!(parse(&["--lf"]).line_ending(), LineEnding::Lf);
    assert!(try_parse(&["--lf", "--crlf"]).is_none());
  }

  #[test]
  fn hold_needs_a_window() {
    assert!(parse(&["--hold"]).hold);
    assert!(try_parse(&["--hold", "--no-window"]).is_none());
  }

  #[test]
  fn context_hints() {
    let opts = parse(&[
      "--gl-version",
      "3.3",
      "--profile",
      "core",
      "--forward-compat",
      "--robustness",
      "lose",
    ]);
    let hints = opts.context_hints();

    assert_eq!(hints.version(), Some((3, 3)));
    assert_eq!(hints.profile(), Some(Profile::Core));
    assert!(hints.forward_compat());
    assert!(!hints.debug());
    assert_eq!(hints.robustness(), Some(Robustness::Lose));
  }

  #[test]
  fn bad_version() {
    assert!(try_parse(&["--gl-version", "three"]).is_none());
    assert!(try_parse(&["--profile", "es"]).is_none());
  }
}
