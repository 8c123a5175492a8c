//! [GLFW](https://crates.io/crates/glfw) backend for [glfwdiag](https://crates.io/crates/glfwdiag).
//!
//! [`GlfwPlatform`] wraps an initialized GLFW library and answers monitor and joystick queries.
//! [`TestWindow`] is a small window whose OpenGL context is made current so that the context and
//! its extensions can be inspected. [`test_default_window`] ties both together and reports the
//! context into a [`Report`](glfwdiag::Report).

#![deny(missing_docs)]

mod hints;
mod platform;
mod window;

pub use crate::hints::{parse_version, ContextHints, HintParseError, Profile, Robustness};
pub use crate::platform::GlfwPlatform;
pub use crate::window::{test_default_window, TestWindow};

use glfw::InitError;
use glfwdiag::backend::QueryError;
use std::{error, fmt};

/// Error that can be risen while gathering diagnostics.
#[non_exhaustive]
#[derive(Debug)]
pub enum DiagError {
  /// Initialization of GLFW went wrong.
  ///
  /// This variant exposes a **glfw** error for further information about what went wrong.
  InitError(InitError),

  /// The test window (and its context) couldn’t be created.
  WindowCreation,

  /// The current context couldn’t be queried.
  Query(QueryError),
}

impl fmt::Display for DiagError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      DiagError::InitError(ref e) => write!(f, "initialization error: {}", e),
      DiagError::WindowCreation => f.write_str("failed to create the test window"),
      DiagError::Query(ref e) => write!(f, "failed to query the context: {}", e),
    }
  }
}

impl From<InitError> for DiagError {
  fn from(e: InitError) -> Self {
    DiagError::InitError(e)
  }
}

impl From<QueryError> for DiagError {
  fn from(e: QueryError) -> Self {
    DiagError::Query(e)
  }
}

impl error::Error for DiagError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      DiagError::InitError(e) => Some(e),
      DiagError::WindowCreation => None,
      DiagError::Query(e) => Some(e),
    }
  }
}
