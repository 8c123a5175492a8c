//! Test window and OpenGL context queries.

use crate::{ContextHints, DiagError, GlfwPlatform};
use gl::types::{GLenum, GLint, GLubyte, GLuint};
use glfw::{Context as _, SwapInterval, Window, WindowEvent, WindowMode};
use glfwdiag::backend::{ContextAttribs, ContextQuery, ContextString, QueryError};
use glfwdiag::{reporter, Report};
use std::{
  ffi::CStr,
  os::raw::{c_char, c_void},
  sync::mpsc::Receiver,
};

/// `GL_RESET_NOTIFICATION_STRATEGY_ARB`.
const RESET_NOTIFICATION_STRATEGY_ARB: GLenum = 0x8256;

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;
const WINDOW_TITLE: &str = "Window Title";

/// A window whose OpenGL context is current on the calling thread.
///
/// OpenGL functions are loaded from this window’s context when it’s created; the queries of
/// [`ContextQuery`] are only meaningful as long as the context stays current.
#[derive(Debug)]
pub struct TestWindow {
  /// Wrapped GLFW window.
  pub window: Window,

  /// Wrapped GLFW events queue.
  pub events_rx: Receiver<(f64, WindowEvent)>,
}

impl TestWindow {
  /// Create the test window using the given hints, make its context current and load OpenGL.
  pub fn new(platform: &mut GlfwPlatform, hints: &ContextHints) -> Result<Self, DiagError> {
    hints.apply(&mut platform.glfw);

    let (mut window, events_rx) = platform
      .glfw
      .create_window(WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE, WindowMode::Windowed)
      .ok_or(DiagError::WindowCreation)?;

    window.make_current();
    platform.glfw.set_swap_interval(SwapInterval::Sync(1));

    // init OpenGL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    Ok(TestWindow { window, events_rx })
  }

  /// Keep clearing and presenting the window until the user closes it.
  pub fn hold(&mut self) {
    log::info!("waiting for the test window to be closed");

    while !self.window.should_close() {
      unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
      self.window.swap_buffers();
      self.window.glfw.wait_events();

      for (_, event) in glfw::flush_messages(&self.events_rx) {
        log::trace!("test window event: {:?}", event);
      }
    }
  }
}

/// Create a default window and report its context and extensions.
///
/// The time it took to create the window is reported as well. The window is handed back so that
/// callers can keep it open.
pub fn test_default_window(
  report: &mut Report,
  platform: &mut GlfwPlatform,
  hints: &ContextHints,
) -> Result<TestWindow, DiagError> {
  report.append_separator();
  report.append_line("Creating a default window");

  let base = platform.glfw.get_time();
  let window = TestWindow::new(platform, hints)?;
  let elapsed = platform.glfw.get_time() - base;

  report.append_line(format!("Creating the window took {:.3} seconds", elapsed));

  reporter::context(report, &window);
  reporter::extensions(report, &window)?;

  Ok(window)
}

unsafe fn gl_string(ptr: *const GLubyte) -> Option<String> {
  if ptr.is_null() {
    None
  } else {
    Some(
      CStr::from_ptr(ptr as *const c_char)
        .to_string_lossy()
        .into_owned(),
    )
  }
}

unsafe fn gl_integer(pname: GLenum) -> GLint {
  let mut value = 0;
  gl::GetIntegerv(pname, &mut value);
  value
}

impl ContextQuery for TestWindow {
  fn attribs(&self) -> ContextAttribs {
    let version = self.window.get_context_version();

    ContextAttribs {
      client_api: self.window.get_client_api(),
      major: version.major as u32,
      minor: version.minor as u32,
      revision: version.patch as u32,
      forward_compat: self.window.is_opengl_forward_compat(),
      debug: self.window.is_opengl_debug_context(),
      robustness: self.window.get_context_robustness(),
      profile: self.window.get_opengl_profile(),
    }
  }

  fn string(&self, which: ContextString) -> Option<String> {
    let name = match which {
      ContextString::Version => gl::VERSION,
      ContextString::Renderer => gl::RENDERER,
      ContextString::Vendor => gl::VENDOR,
      ContextString::ShadingLanguageVersion => gl::SHADING_LANGUAGE_VERSION,
    };

    unsafe { gl_string(gl::GetString(name)) }
  }

  fn context_flags(&self) -> i32 {
    unsafe { gl_integer(gl::CONTEXT_FLAGS) }
  }

  fn profile_mask(&self) -> i32 {
    unsafe { gl_integer(gl::CONTEXT_PROFILE_MASK) }
  }

  fn reset_notification_strategy(&self) -> i32 {
    unsafe { gl_integer(RESET_NOTIFICATION_STRATEGY_ARB) }
  }

  fn extension_supported(&self, name: &str) -> bool {
    self.window.glfw.extension_supported(name)
  }

  fn indexed_extensions(&self) -> Result<Vec<String>, QueryError> {
    if !gl::GetStringi::is_loaded() {
      return Err(QueryError::MissingEntryPoint("glGetStringi"));
    }

    let count = unsafe { gl_integer(gl::NUM_EXTENSIONS) };
    let names = (0..count.max(0) as GLuint)
      .map(|i| {
        unsafe { gl_string(gl::GetStringi(gl::EXTENSIONS, i)) }.unwrap_or_else(|| {
          log::warn!("no name for extension {} of {}", i, count);
          String::new()
        })
      })
      .collect();

    Ok(names)
  }

  fn legacy_extensions(&self) -> Option<String> {
    unsafe { gl_string(gl::GetString(gl::EXTENSIONS)) }
  }
}
