//! Append-only diagnostic report.
//!
//! A [`Report`] accumulates already-rendered text fragments, one after the other. Formatting is
//! performed at the call site (typically with [`format!`] or [`write!`]); the report itself only
//! concatenates. Nothing that has been appended can be edited nor removed; the only way to get rid
//! of content is to [`Report::reset`] the whole report.

use std::fmt;

/// Line ending used by a [`Report`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LineEnding {
  /// `\n`.
  Lf,
  /// `\r\n`.
  CrLf,
}

impl LineEnding {
  /// Textual representation of the line ending.
  pub fn as_str(self) -> &'static str {
    match self {
      LineEnding::Lf => "\n",
      LineEnding::CrLf => "\r\n",
    }
  }
}

impl Default for LineEnding {
  /// `CrLf` on Windows, `Lf` everywhere else.
  fn default() -> Self {
    if cfg!(windows) {
      LineEnding::CrLf
    } else {
      LineEnding::Lf
    }
  }
}

/// Diagnostic report.
///
/// The backing storage grows on demand (amortized doubling), so fragments of any size can be
/// appended. Running out of memory aborts the process, which is the expected behavior for a
/// one-shot diagnostic tool.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
  text: String,
  line_ending: LineEnding,
}

impl Report {
  /// Create an empty report using the platform default [`LineEnding`].
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an empty report using the given [`LineEnding`].
  pub fn with_line_ending(line_ending: LineEnding) -> Self {
    Report {
      text: String::new(),
      line_ending,
    }
  }

  /// Line ending used by [`Report::append_line`] and [`Report::append_separator`].
  #[inline]
  pub fn line_ending(&self) -> LineEnding {
    self.line_ending
  }

  /// Append a fragment after everything that was previously appended.
  pub fn append(&mut self, fragment: impl AsRef<str>) {
    self.text.push_str(fragment.as_ref());
  }

  /// Append a fragment and terminate it with the line ending.
  pub fn append_line(&mut self, fragment: impl AsRef<str>) {
    self.append(fragment);
    self.text.push_str(self.line_ending.as_str());
  }

  /// Append a section break.
  ///
  /// The marker is a single line ending; following a terminated line, it shows up as a blank line.
  pub fn append_separator(&mut self) {
    self.text.push_str(self.line_ending.as_str());
  }

  /// Accumulated text so far.
  ///
  /// Reading doesn’t alter the report; an untouched report yields an empty string.
  #[inline]
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Alias of [`Report::text`].
  #[inline]
  pub fn get_report(&self) -> &str {
    self.text()
  }

  /// Length of the accumulated text, in bytes.
  #[inline]
  pub fn len(&self) -> usize {
    self.text.len()
  }

  /// Whether nothing has been appended yet (or since the last reset).
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// Drop all the accumulated text, keeping the line ending.
  pub fn reset(&mut self) {
    self.text.clear();
  }

  /// Consume the report and get its text.
  pub fn into_string(self) -> String {
    self.text
  }
}

impl fmt::Write for Report {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    self.append(s);
    Ok(())
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.text)
  }
}
