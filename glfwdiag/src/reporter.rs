//! Subsystem reporters.
//!
//! A reporter queries one subsystem through a [`backend`](crate::backend) and appends a stylized
//! block of text to a [`Report`]. Reporters never fail on unexpected values: unknown codes are
//! rendered as [`UNKNOWN`](crate::names::UNKNOWN) so that the report always completes.
//!
//! The typical sequence is:
//!
//! 1. [`header`]
//! 2. [`monitors`]
//! 3. [`joysticks`]
//! 4. [`context`] and [`extensions`], once a context is current.
//!
//! [`errors`] can be interleaved at any point to flush the errors raised by the windowing library.

mod context;
mod extension;
mod joystick;
mod monitor;

pub use self::context::context;
pub use self::extension::extensions;
pub use self::joystick::joysticks;
pub use self::monitor::monitors;

use crate::backend::Platform;
use crate::report::Report;

/// Name of the tool, as written in the report header.
pub const TOOL_NAME: &str = "GLFWDIAG";

/// Default file name suggested when saving a report.
pub const DEFAULT_REPORT_FILE_NAME: &str = "GLFWDIAG.txt";

/// Report the tool and windowing library versions.
pub fn header<P>(report: &mut Report, platform: &P)
where
  P: ?Sized + Platform,
{
  report.append_line(format!("{} {}", TOOL_NAME, env!("CARGO_PKG_VERSION")));
  report.append_line(format!("GLFW {}", platform.version_string()));
}

/// Report errors raised by the windowing library.
///
/// Each error gets its own section. Errors are collected while a step runs and flushed once it’s
/// done, so they land after that step’s block rather than at the line that raised them.
pub fn errors<I>(report: &mut Report, errors: I)
where
  I: IntoIterator,
  I::Item: AsRef<str>,
{
  for description in errors {
    report.append_separator();
    report.append_line(description);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::backend::{JoystickSlot, MonitorInfo};
  use crate::report::LineEnding;

  struct Versioned;

  impl Platform for Versioned {
    fn version_string(&self) -> String {
      "3.3.8 X11 GLX EGL OSMesa".to_owned()
    }

    fn monitors(&mut self) -> Vec<MonitorInfo> {
      Vec::new()
    }

    fn joysticks(&mut self) -> Vec<JoystickSlot> {
      Vec::new()
    }
  }

  #[test]
  fn header_lines() {
    let mut report = Report::with_line_ending(LineEnding::Lf);
    header(&mut report, &Versioned);

    let lines: Vec<_> = report.text().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("GLFWDIAG "));
    assert_eq!(lines[1], "GLFW 3.3.8 X11 GLX EGL OSMesa");
  }

  #[test]
  fn errors_get_a_section_each() {
    let mut report = Report::with_line_ending(LineEnding::Lf);
    errors(&mut report, vec!["first", "second"]);
    assert_eq!(report.text(), "\nfirst\n\nsecond\n");
  }

  #[test]
  fn no_errors_no_output() {
    let mut report = Report::new();
    errors(&mut report, Vec::<String>::new());
    assert!(report.is_empty());
  }
}
