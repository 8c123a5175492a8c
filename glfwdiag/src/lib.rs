//! # glfwdiag
//!
//! A tiny diagnostic crate that gathers what a windowing library and its graphics context have to
//! say about the machine they run on, and turns that into a plain text report. The typical output
//! lists connected monitors and their video modes, joystick slots, the version, flags, profile and
//! robustness strategy of the active OpenGL context and the extensions it supports.
//!
//! # What’s included
//!
//! - [`Report`]: an append-only text accumulator. You pass it explicitly to every reporter; there
//!   is no hidden global buffer.
//! - [`backend`]: the query traits a windowing backend must implement so that reporters can ask it
//!   about monitors, joysticks and the current context. `glfwdiag-glfw` implements them on top of
//!   **GLFW** and **OpenGL**.
//! - [`reporter`]: the functions that query one subsystem each and append a stylized block to a
//!   [`Report`].
//! - [`names`]: lookup tables mapping raw driver / windowing codes to display names. Driver values
//!   and values cached by the windowing library are resolved independently so that both can be
//!   printed side by side.
//!
//! This crate doesn’t perform any FFI by itself, which makes it easy to test reporters against
//! fake backends.

#![deny(missing_docs)]

pub mod backend;
pub mod names;
pub mod report;
pub mod reporter;

pub use crate::report::{LineEnding, Report};
