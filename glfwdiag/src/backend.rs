//! Backend query interface.
//!
//! Reporters don’t talk to GLFW nor OpenGL directly. Instead, they query a backend implementing the
//! traits of this module. The descriptors returned by the backend are transient: they are read for
//! the duration of a single reporter call and never retained.

use std::{error, fmt};

/// Query error.
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq)]
pub enum QueryError {
  /// A function required to perform the query isn’t exposed by the driver.
  MissingEntryPoint(&'static str),
}

impl fmt::Display for QueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      QueryError::MissingEntryPoint(name) => write!(f, "missing entry point: {}", name),
    }
  }
}

impl error::Error for QueryError {}

/// A video mode of a monitor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VideoMode {
  /// Width, in screen coordinates.
  pub width: u32,
  /// Height, in screen coordinates.
  pub height: u32,
  /// Bit depth of the red channel.
  pub red_bits: u32,
  /// Bit depth of the green channel.
  pub green_bits: u32,
  /// Bit depth of the blue channel.
  pub blue_bits: u32,
  /// Refresh rate, in Hz.
  pub refresh_rate: u32,
}

impl VideoMode {
  /// Sum of the per-channel bit depths.
  pub fn bits_per_pixel(&self) -> u32 {
    self.red_bits + self.green_bits + self.blue_bits
  }
}

impl fmt::Display for VideoMode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "{} x {} x {} ({} {} {}) {} Hz",
      self.width,
      self.height,
      self.bits_per_pixel(),
      self.red_bits,
      self.green_bits,
      self.blue_bits,
      self.refresh_rate
    )
  }
}

/// A connected monitor.
#[derive(Clone, Debug, PartialEq)]
pub struct MonitorInfo {
  /// Human-readable name, if any.
  pub name: Option<String>,
  /// Whether this is the primary monitor.
  pub primary: bool,
  /// Current video mode, if it could be read.
  pub current_mode: Option<VideoMode>,
  /// Position on the virtual desktop, in screen coordinates.
  pub position: (i32, i32),
  /// Physical size, in millimeters.
  pub physical_size_mm: (i32, i32),
  /// All the supported video modes.
  pub modes: Vec<VideoMode>,
}

impl MonitorInfo {
  /// Horizontal pixel density of the current mode.
  ///
  /// The value is truncated toward zero. `None` is returned if the current mode is unknown or if
  /// the monitor doesn’t report a physical width.
  pub fn dpi(&self) -> Option<i32> {
    let mode = self.current_mode?;
    dpi(mode.width, self.physical_size_mm.0)
  }
}

/// Pixel density of `width_px` pixels laid over `width_mm` millimeters, truncated toward zero.
pub fn dpi(width_px: u32, width_mm: i32) -> Option<i32> {
  if width_mm <= 0 {
    return None;
  }

  Some((width_px as f32 * 25.4 / width_mm as f32) as i32)
}

/// State of a joystick slot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum JoystickState {
  /// A device is plugged in the slot.
  Present {
    /// Device name, if any.
    name: Option<String>,
    /// Number of axes.
    axes: usize,
    /// Number of buttons.
    buttons: usize,
  },
  /// Nothing in the slot.
  Absent,
}

/// A joystick slot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JoystickSlot {
  /// Slot index.
  pub index: i32,
  /// What’s in the slot.
  pub state: JoystickState,
}

/// Attributes of the current context, as parsed and cached by the windowing library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContextAttribs {
  /// Client API code.
  pub client_api: i32,
  /// Major version.
  pub major: u32,
  /// Minor version.
  pub minor: u32,
  /// Revision.
  pub revision: u32,
  /// Whether the context is forward-compatible.
  pub forward_compat: bool,
  /// Whether the context is a debug context.
  pub debug: bool,
  /// Robustness strategy code.
  pub robustness: i32,
  /// Profile code.
  pub profile: i32,
}

impl ContextAttribs {
  /// Whether the context version is at least `major.minor`.
  pub fn version_at_least(&self, major: u32, minor: u32) -> bool {
    self.major > major || (self.major == major && self.minor >= minor)
  }
}

/// Strings exposed by the driver via `glGetString`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContextString {
  /// `GL_VERSION`.
  Version,
  /// `GL_RENDERER`.
  Renderer,
  /// `GL_VENDOR`.
  Vendor,
  /// `GL_SHADING_LANGUAGE_VERSION`.
  ShadingLanguageVersion,
}

/// Extensions supported by the current context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Extensions {
  /// Extensions queried one by one (`glGetStringi`).
  Indexed(Vec<String>),
  /// The legacy space-separated `GL_EXTENSIONS` string.
  Legacy(String),
}

impl Extensions {
  /// Iterate over the extension names.
  ///
  /// The legacy string is split on whitespace; runs of whitespace and trailing whitespace never
  /// yield empty names.
  pub fn names<'a>(&'a self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match self {
      Extensions::Indexed(names) => Box::new(names.iter().map(String::as_str)),
      Extensions::Legacy(s) => Box::new(s.split_ascii_whitespace()),
    }
  }
}

/// Windowing platform.
pub trait Platform {
  /// Runtime version string of the windowing library.
  fn version_string(&self) -> String;

  /// All connected monitors, in the order the windowing library lists them.
  fn monitors(&mut self) -> Vec<MonitorInfo>;

  /// All joystick slots, present or not.
  fn joysticks(&mut self) -> Vec<JoystickSlot>;
}

/// Current graphics context.
pub trait ContextQuery {
  /// Attributes as parsed by the windowing library.
  fn attribs(&self) -> ContextAttribs;

  /// A driver string. `None` if the driver returns nothing.
  fn string(&self, which: ContextString) -> Option<String>;

  /// `GL_CONTEXT_FLAGS`, as reported by the driver.
  fn context_flags(&self) -> i32;

  /// `GL_CONTEXT_PROFILE_MASK`, as reported by the driver.
  fn profile_mask(&self) -> i32;

  /// `GL_RESET_NOTIFICATION_STRATEGY_ARB`, as reported by the driver.
  fn reset_notification_strategy(&self) -> i32;

  /// Whether an extension is supported by the context.
  fn extension_supported(&self, name: &str) -> bool;

  /// Supported extensions, queried one by one (`GL_NUM_EXTENSIONS` and `glGetStringi`).
  ///
  /// Fails with [`QueryError::MissingEntryPoint`] if `glGetStringi` is absent. An index the driver
  /// returns nothing for yields an empty name, so that the list keeps `GL_NUM_EXTENSIONS` entries.
  fn indexed_extensions(&self) -> Result<Vec<String>, QueryError>;

  /// The legacy space-separated `GL_EXTENSIONS` string. `None` if the driver returns nothing.
  fn legacy_extensions(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dpi_truncates() {
    assert_eq!(dpi(1920, 520), Some(93));
    assert_eq!(dpi(2560, 597), Some(108));
  }

  #[test]
  fn dpi_without_physical_width() {
    assert_eq!(dpi(1920, 0), None);
    assert_eq!(dpi(1920, -3), None);
  }

  #[test]
  fn video_mode_display() {
    let mode = VideoMode {
      width: 1920,
      height: 1080,
      red_bits: 8,
      green_bits: 8,
      blue_bits: 8,
      refresh_rate: 60,
    };

    assert_eq!(mode.to_string(), "1920 x 1080 x 24 (8 8 8) 60 Hz");
  }

  #[test]
  fn legacy_extensions_split() {
    let ext = Extensions::Legacy("  GL_A  GL_B GL_C ".to_owned());
    assert_eq!(ext.names().collect::<Vec<_>>(), vec!["GL_A", "GL_B", "GL_C"]);
  }

  #[test]
  fn version_comparison() {
    let attribs = ContextAttribs {
      client_api: 0,
      major: 3,
      minor: 2,
      revision: 0,
      forward_compat: false,
      debug: false,
      robustness: 0,
      profile: 0,
    };

    assert!(attribs.version_at_least(3, 2));
    assert!(attribs.version_at_least(2, 9));
    assert!(!attribs.version_at_least(3, 3));
    assert!(!attribs.version_at_least(4, 0));
  }
}
