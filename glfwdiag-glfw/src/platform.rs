//! GLFW platform queries.

use crate::DiagError;
use glfw::{Glfw, JoystickId, Monitor, VidMode};
use glfwdiag::backend::{JoystickSlot, JoystickState, MonitorInfo, Platform, VideoMode};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Every joystick slot GLFW knows about, in slot order.
const JOYSTICK_IDS: [JoystickId; 16] = [
  JoystickId::Joystick1,
  JoystickId::Joystick2,
  JoystickId::Joystick3,
  JoystickId::Joystick4,
  JoystickId::Joystick5,
  JoystickId::Joystick6,
  JoystickId::Joystick7,
  JoystickId::Joystick8,
  JoystickId::Joystick9,
  JoystickId::Joystick10,
  JoystickId::Joystick11,
  JoystickId::Joystick12,
  JoystickId::Joystick13,
  JoystickId::Joystick14,
  JoystickId::Joystick15,
  JoystickId::Joystick16,
];

/// An initialized GLFW library.
///
/// Errors raised by GLFW are not fatal: they are collected and can be retrieved with
/// [`GlfwPlatform::take_errors`], so that they end up in the report.
#[derive(Debug)]
pub struct GlfwPlatform {
  /// Wrapped GLFW handle.
  pub glfw: Glfw,

  errors_rx: Receiver<String>,
}

impl GlfwPlatform {
  /// Initialize GLFW.
  pub fn new() -> Result<Self, DiagError> {
    let (errors_tx, errors_rx) = channel();
    let callback = glfw::Callback {
      f: collect_error as fn(glfw::Error, String, &Sender<String>),
      data: errors_tx,
    };

    let glfw = glfw::init(Some(callback))?;
    log::info!("GLFW {} initialized", glfw::get_version_string());

    Ok(GlfwPlatform { glfw, errors_rx })
  }

  /// Take the descriptions of the errors raised by GLFW since the last call.
  pub fn take_errors(&mut self) -> Vec<String> {
    self.errors_rx.try_iter().collect()
  }
}

fn collect_error(error: glfw::Error, description: String, errors_tx: &Sender<String>) {
  log::warn!("GLFW error ({:?}): {}", error, description);

  // the receiver only goes away with the platform itself
  let _ = errors_tx.send(description);
}

impl Platform for GlfwPlatform {
  fn version_string(&self) -> String {
    glfw::get_version_string()
  }

  fn monitors(&mut self) -> Vec<MonitorInfo> {
    let primary = self
      .glfw
      .with_primary_monitor(|_, monitor| monitor.map(|m| monitor_key(m)));

    self.glfw.with_connected_monitors(|_, monitors| {
      monitors
        .iter()
        .map(|monitor| {
          let key = monitor_key(monitor);

          MonitorInfo {
            primary: primary.as_ref() == Some(&key),
            name: key.0,
            current_mode: monitor.get_video_mode().as_ref().map(video_mode),
            position: key.1,
            physical_size_mm: monitor.get_physical_size(),
            modes: monitor.get_video_modes().iter().map(video_mode).collect(),
          }
        })
        .collect()
    })
  }

  fn joysticks(&mut self) -> Vec<JoystickSlot> {
    JOYSTICK_IDS
      .iter()
      .map(|&id| {
        let joystick = self.glfw.get_joystick(id);
        let state = if joystick.is_present() {
          JoystickState::Present {
            name: joystick.get_name(),
            axes: joystick.get_axes().len(),
            buttons: joystick.get_buttons().len(),
          }
        } else {
          JoystickState::Absent
        };

        JoystickSlot {
          index: id as i32,
          state,
        }
      })
      .collect()
  }
}

// GLFW doesn’t expose monitor identity; two monitors never share a name and a desktop position.
fn monitor_key(monitor: &Monitor) -> (Option<String>, (i32, i32)) {
  (monitor.get_name(), monitor.get_pos())
}

fn video_mode(mode: &VidMode) -> VideoMode {
  VideoMode {
    width: mode.width,
    height: mode.height,
    red_bits: mode.red_bits,
    green_bits: mode.green_bits,
    blue_bits: mode.blue_bits,
    refresh_rate: mode.refresh_rate,
  }
}
