use crate::backend::{MonitorInfo, Platform};
use crate::names::UNKNOWN;
use crate::report::Report;

/// Report every connected monitor.
///
/// Each monitor gets its own section with its name, its current mode, its position on the virtual
/// desktop, its physical size and pixel density and the list of all its video modes. No monitor,
/// no output.
pub fn monitors<P>(report: &mut Report, platform: &mut P)
where
  P: ?Sized + Platform,
{
  let monitors = platform.monitors();
  log::debug!("reporting {} monitor(s)", monitors.len());

  for (i, monitor) in monitors.iter().enumerate() {
    monitor_block(report, i, monitor);
  }
}

fn monitor_block(report: &mut Report, index: usize, monitor: &MonitorInfo) {
  let name = monitor.name.as_deref().unwrap_or(UNKNOWN);
  let designation = if monitor.primary {
    "primary"
  } else {
    "secondary"
  };

  report.append_separator();
  report.append_line(format!("Monitor {} ({}) {}", index, name, designation));

  match monitor.current_mode {
    Some(ref mode) => report.append_line(format!("Current mode: {}", mode)),
    None => report.append_line(format!("Current mode: {}", UNKNOWN)),
  }

  let (x, y) = monitor.position;
  report.append_line(format!("Virtual position: {} {}", x, y));

  let (width_mm, height_mm) = monitor.physical_size_mm;
  let dpi = monitor
    .dpi()
    .map(|dpi| dpi.to_string())
    .unwrap_or_else(|| UNKNOWN.to_owned());
  report.append_line(format!(
    "Physical size: {} x {} mm ({} dpi)",
    width_mm, height_mm, dpi
  ));

  report.append_line("Modes:");
  for (j, mode) in monitor.modes.iter().enumerate() {
    report.append_line(format!("{:04}: {}", j, mode));
  }
}
